//! Domain & parameter models for pack operations
//!
//! Defines the pack domain model, the pack parameter models, and provides methods to
//! convert the pack domain model from entity and into DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::model::pack::{CreatePackDto, PackDto, UpdatePackDto};

/// The pack domain model
///
/// A purchasable bundle of cards, e.g. a booster of one set.
#[derive(Debug, Clone, PartialEq)]
pub struct Pack {
    pub id: Uuid,
    pub name: String,
    pub set_code: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub card_count: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pack {
    /// Converts an entity model to the pack domain model
    pub fn from_entity(entity: entity::pack::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            set_code: entity.set_code,
            description: entity.description,
            release_date: entity.release_date,
            card_count: entity.card_count,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the pack domain model into a DTO for API responses
    pub fn into_dto(self) -> PackDto {
        PackDto {
            id: self.id,
            name: self.name,
            set_code: self.set_code,
            description: self.description,
            release_date: self.release_date,
            card_count: self.card_count,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new pack
#[derive(Debug, Clone)]
pub struct CreatePackParam {
    pub name: String,
    pub set_code: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub card_count: Option<i32>,
    pub image_url: Option<String>,
}

impl From<CreatePackDto> for CreatePackParam {
    fn from(dto: CreatePackDto) -> Self {
        Self {
            name: dto.name,
            set_code: dto.set_code,
            description: dto.description,
            release_date: dto.release_date,
            card_count: dto.card_count,
            image_url: dto.image_url,
        }
    }
}

/// Parameters for updating an existing pack
///
/// `None` leaves a column unchanged. For nullable columns `Some(None)` clears it.
/// `name` is required, so `Some(None)` for it is rejected by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdatePackParam {
    pub name: Option<Option<String>>,
    pub set_code: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub release_date: Option<Option<NaiveDate>>,
    pub card_count: Option<Option<i32>>,
    pub image_url: Option<Option<String>>,
}

impl From<UpdatePackDto> for UpdatePackParam {
    fn from(dto: UpdatePackDto) -> Self {
        Self {
            name: dto.name,
            set_code: dto.set_code,
            description: dto.description,
            release_date: dto.release_date,
            card_count: dto.card_count,
            image_url: dto.image_url,
        }
    }
}
