//! Pack factory for creating test pack rows.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test packs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pack::PackFactory;
///
/// let pack = PackFactory::new(&db)
///     .name("Jungle")
///     .build()
///     .await?;
/// ```
pub struct PackFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    set_code: Option<String>,
    description: Option<String>,
    release_date: Option<NaiveDate>,
    card_count: Option<i32>,
    image_url: Option<String>,
}

impl<'a> PackFactory<'a> {
    /// Creates a new PackFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pack {id}"` where id is auto-incremented
    /// - every optional column: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pack {}", id),
            set_code: None,
            description: None,
            release_date: None,
            card_count: None,
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_code(mut self, set_code: impl Into<String>) -> Self {
        self.set_code = Some(set_code.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn card_count(mut self, card_count: i32) -> Self {
        self.card_count = Some(card_count);
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Builds and inserts the pack row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pack::Model)` - Created pack row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pack::Model, DbErr> {
        let now = Utc::now();

        entity::pack::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            set_code: ActiveValue::Set(self.set_code),
            description: ActiveValue::Set(self.description),
            release_date: ActiveValue::Set(self.release_date),
            card_count: ActiveValue::Set(self.card_count),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pack with default values.
///
/// Shorthand for `PackFactory::new(db).build().await`.
pub async fn create_pack(db: &DatabaseConnection) -> Result<entity::pack::Model, DbErr> {
    PackFactory::new(db).build().await
}
