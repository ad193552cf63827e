use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::deck::{CreateDeckDto, DeckDto, UpdateDeckDto};

/// The deck domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    pub fn from_entity(entity: entity::deck::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DeckDto {
        DeckDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDeckParam {
    pub name: String,
    pub description: Option<String>,
}

impl From<CreateDeckDto> for CreateDeckParam {
    fn from(dto: CreateDeckDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// `Some(None)` for `name` is rejected by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateDeckParam {
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

impl From<UpdateDeckDto> for UpdateDeckParam {
    fn from(dto: UpdateDeckDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
