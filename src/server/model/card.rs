//! Domain & parameter models for card operations

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::card::{CardDto, CreateCardDto, UpdateCardDto};

/// The card domain model
///
/// A single card, optionally belonging to the pack it was released in.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub pack_id: Option<Uuid>,
    pub name: String,
    pub card_number: Option<String>,
    pub rarity: Option<String>,
    pub card_type: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            pack_id: entity.pack_id,
            name: entity.name,
            card_number: entity.card_number,
            rarity: entity.rarity,
            card_type: entity.card_type,
            description: entity.description,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            pack_id: self.pack_id,
            name: self.name,
            card_number: self.card_number,
            rarity: self.rarity,
            card_type: self.card_type,
            description: self.description,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new card
#[derive(Debug, Clone)]
pub struct CreateCardParam {
    pub pack_id: Option<Uuid>,
    pub name: String,
    pub card_number: Option<String>,
    pub rarity: Option<String>,
    pub card_type: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<CreateCardDto> for CreateCardParam {
    fn from(dto: CreateCardDto) -> Self {
        Self {
            pack_id: dto.pack_id,
            name: dto.name,
            card_number: dto.card_number,
            rarity: dto.rarity,
            card_type: dto.card_type,
            description: dto.description,
            image_url: dto.image_url,
        }
    }
}

/// Parameters for updating an existing card
///
/// `None` leaves a column unchanged. For nullable columns `Some(None)` clears it,
/// which for `pack_id` detaches the card from its pack.
/// `name` is required, so `Some(None)` for it is rejected by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateCardParam {
    pub pack_id: Option<Option<Uuid>>,
    pub name: Option<Option<String>>,
    pub card_number: Option<Option<String>>,
    pub rarity: Option<Option<String>>,
    pub card_type: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}

impl From<UpdateCardDto> for UpdateCardParam {
    fn from(dto: UpdateCardDto) -> Self {
        Self {
            pack_id: dto.pack_id,
            name: dto.name,
            card_number: dto.card_number,
            rarity: dto.rarity,
            card_type: dto.card_type,
            description: dto.description,
            image_url: dto.image_url,
        }
    }
}
