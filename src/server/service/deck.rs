use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::deck::DeckRepository,
    error::AppError,
    model::deck::{CreateDeckParam, Deck, UpdateDeckParam},
    util::validate::require_non_empty,
};

pub struct DeckService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Deck>, AppError> {
        let decks = DeckRepository::new(self.db).get_all().await?;

        Ok(decks)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Deck, AppError> {
        DeckRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))
    }

    pub async fn create(&self, param: CreateDeckParam) -> Result<Deck, AppError> {
        require_non_empty("name", &param.name)?;

        DeckRepository::new(self.db)
            .create(param)
            .await
            .map_err(AppError::from_write_err)
    }

    pub async fn update(&self, id: Uuid, param: UpdateDeckParam) -> Result<Deck, AppError> {
        if let Some(name) = &param.name {
            require_non_empty("name", name.as_deref().unwrap_or_default())?;
        }

        DeckRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(AppError::from_write_err)?
            .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = DeckRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Deck not found".to_string()));
        }

        Ok(())
    }
}
