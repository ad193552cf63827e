use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{card::CardRepository, pack::PackRepository},
    error::AppError,
    model::{
        card::Card,
        pack::{CreatePackParam, Pack, UpdatePackParam},
    },
    util::validate::{require_non_empty, require_non_negative},
};

pub struct PackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pack
    pub async fn get_all(&self) -> Result<Vec<Pack>, AppError> {
        let packs = PackRepository::new(self.db).get_all().await?;

        Ok(packs)
    }

    /// Gets a pack by ID
    ///
    /// # Returns
    /// - `Ok(Pack)` - The requested pack
    /// - `Err(AppError::NotFound)` - No pack with the provided ID exists
    /// - `Err(AppError::DbErr)` - Database error during select
    pub async fn get_by_id(&self, id: Uuid) -> Result<Pack, AppError> {
        PackRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pack not found".to_string()))
    }

    /// Gets the cards of a pack
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - The pack's cards, possibly empty
    /// - `Err(AppError::NotFound)` - No pack with the provided ID exists
    pub async fn get_cards(&self, id: Uuid) -> Result<Vec<Card>, AppError> {
        if !PackRepository::new(self.db).exists(id).await? {
            return Err(AppError::NotFound("Pack not found".to_string()));
        }

        let cards = CardRepository::new(self.db).get_all(Some(id)).await?;

        Ok(cards)
    }

    /// Creates a new pack
    ///
    /// # Returns
    /// - `Ok(Pack)` - The created pack including its assigned ID
    /// - `Err(AppError::BadRequest)` - Validation failed or the insert was rejected
    pub async fn create(&self, param: CreatePackParam) -> Result<Pack, AppError> {
        require_non_empty("name", &param.name)?;
        require_non_negative("card_count", param.card_count)?;

        PackRepository::new(self.db)
            .create(param)
            .await
            .map_err(AppError::from_write_err)
    }

    /// Updates the supplied fields of a pack
    ///
    /// # Returns
    /// - `Ok(Pack)` - The updated pack
    /// - `Err(AppError::NotFound)` - No pack with the provided ID exists
    /// - `Err(AppError::BadRequest)` - Validation failed or the update was rejected
    pub async fn update(&self, id: Uuid, param: UpdatePackParam) -> Result<Pack, AppError> {
        if let Some(name) = &param.name {
            require_non_empty("name", name.as_deref().unwrap_or_default())?;
        }
        require_non_negative("card_count", param.card_count.flatten())?;

        PackRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(AppError::from_write_err)?
            .ok_or_else(|| AppError::NotFound("Pack not found".to_string()))
    }

    /// Deletes a pack
    ///
    /// # Returns
    /// - `Ok(())` - The pack was deleted
    /// - `Err(AppError::NotFound)` - Nothing was deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = PackRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Pack not found".to_string()));
        }

        Ok(())
    }
}
