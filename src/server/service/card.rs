use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{card::CardRepository, pack::PackRepository},
    error::AppError,
    model::card::{Card, CreateCardParam, UpdateCardParam},
    util::validate::require_non_empty,
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every card, optionally limited to one pack
    pub async fn get_all(&self, pack_id: Option<Uuid>) -> Result<Vec<Card>, AppError> {
        let cards = CardRepository::new(self.db).get_all(pack_id).await?;

        Ok(cards)
    }

    /// Gets a card by ID, failing with `NotFound` if it does not exist
    pub async fn get_by_id(&self, id: Uuid) -> Result<Card, AppError> {
        CardRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
    }

    /// Creates a new card
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card including its assigned ID
    /// - `Err(AppError::BadRequest)` - Validation failed, `pack_id` names no pack, or the
    ///   insert was rejected
    pub async fn create(&self, param: CreateCardParam) -> Result<Card, AppError> {
        require_non_empty("name", &param.name)?;
        if let Some(pack_id) = param.pack_id {
            self.require_pack(pack_id).await?;
        }

        CardRepository::new(self.db)
            .create(param)
            .await
            .map_err(AppError::from_write_err)
    }

    /// Updates the supplied fields of a card
    ///
    /// # Returns
    /// - `Ok(Card)` - The updated card
    /// - `Err(AppError::NotFound)` - No card with the provided ID exists
    /// - `Err(AppError::BadRequest)` - Validation failed, `pack_id` names no pack, or the
    ///   update was rejected
    pub async fn update(&self, id: Uuid, param: UpdateCardParam) -> Result<Card, AppError> {
        if let Some(name) = &param.name {
            require_non_empty("name", name.as_deref().unwrap_or_default())?;
        }
        if let Some(Some(pack_id)) = param.pack_id {
            self.require_pack(pack_id).await?;
        }

        CardRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(AppError::from_write_err)?
            .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
    }

    /// Deletes a card, failing with `NotFound` if nothing was deleted
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = CardRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Card not found".to_string()));
        }

        Ok(())
    }

    async fn require_pack(&self, pack_id: Uuid) -> Result<(), AppError> {
        let exists = PackRepository::new(self.db)
            .exists(pack_id)
            .await
            .map_err(AppError::from_write_err)?;

        if !exists {
            return Err(AppError::BadRequest(format!(
                "Pack {} does not exist",
                pack_id
            )));
        }

        Ok(())
    }
}
