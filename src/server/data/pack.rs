//! Pack data repository for database operations
//!
//! Provides the `PackRepository` for managing packs in the database. Provides methods to
//! list, get, create, update, and delete packs as well as handles the conversion of
//! database entity models into domain models for usage within services & controllers.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::pack::{CreatePackParam, Pack, UpdatePackParam};

/// Repository providing database operations for pack management.
pub struct PackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PackRepository<'a> {
    /// Creates a new PackRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PackRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pack ordered by name, then ID
    ///
    /// # Returns
    /// - `Ok(Vec<Pack>)` - All packs, possibly empty
    /// - `Err(DbErr)` - Database error during select
    pub async fn get_all(&self) -> Result<Vec<Pack>, DbErr> {
        let packs = entity::prelude::Pack::find()
            .order_by_asc(entity::pack::Column::Name)
            .order_by_asc(entity::pack::Column::Id)
            .all(self.db)
            .await?;

        Ok(packs.into_iter().map(Pack::from_entity).collect())
    }

    /// Finds a pack by ID
    ///
    /// # Returns
    /// - `Ok(Some(Pack))` - The requested pack if found
    /// - `Ok(None)` - The requested pack does not exist
    /// - `Err(DbErr)` - Database error during select
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Pack>, DbErr> {
        let pack = entity::prelude::Pack::find_by_id(id).one(self.db).await?;

        Ok(pack.map(Pack::from_entity))
    }

    /// Checks whether a pack with the provided ID exists
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Pack::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Creates a new pack with a freshly generated ID
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the pack fields
    ///
    /// # Returns
    /// - `Ok(Pack)` - The created pack
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePackParam) -> Result<Pack, DbErr> {
        let now = Utc::now();

        let pack = entity::pack::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            set_code: ActiveValue::Set(param.set_code),
            description: ActiveValue::Set(param.description),
            release_date: ActiveValue::Set(param.release_date),
            card_count: ActiveValue::Set(param.card_count),
            image_url: ActiveValue::Set(param.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Pack::from_entity(pack))
    }

    /// Updates the supplied fields of a pack and refreshes `updated_at`
    ///
    /// # Arguments
    /// - `id` - ID of the pack to update
    /// - `param` - Fields to overwrite; `None` leaves a column unchanged
    ///
    /// # Returns
    /// - `Ok(Some(Pack))` - The updated pack
    /// - `Ok(None)` - No pack with the provided ID exists; nothing was written
    /// - `Err(DbErr)` - Database error during select or update
    pub async fn update(&self, id: Uuid, param: UpdatePackParam) -> Result<Option<Pack>, DbErr> {
        let Some(pack) = entity::prelude::Pack::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::pack::ActiveModel = pack.into();
        if let Some(Some(name)) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(set_code) = param.set_code {
            active_model.set_code = ActiveValue::Set(set_code);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(release_date) = param.release_date {
            active_model.release_date = ActiveValue::Set(release_date);
        }
        if let Some(card_count) = param.card_count {
            active_model.card_count = ActiveValue::Set(card_count);
        }
        if let Some(image_url) = param.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let pack = active_model.update(self.db).await?;

        Ok(Some(Pack::from_entity(pack)))
    }

    /// Deletes the pack of the provided ID
    ///
    /// Cards of the pack are kept with their `pack_id` cleared by the store.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows, `0` if the pack did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Pack::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
