//! Card factory for creating test card rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db)
///     .pack_id(pack.id)
///     .rarity("Rare")
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    pack_id: Option<Uuid>,
    name: String,
    card_number: Option<String>,
    rarity: Option<String>,
    card_type: Option<String>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - pack_id: `None`
    /// - name: `"Card {id}"` where id is auto-incremented
    /// - card_number: `"{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            pack_id: None,
            name: format!("Card {}", id),
            card_number: Some(id.to_string()),
            rarity: None,
            card_type: None,
        }
    }

    pub fn pack_id(mut self, pack_id: Uuid) -> Self {
        self.pack_id = Some(pack_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    pub fn card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    /// Builds and inserts the card row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card row
    /// - `Err(DbErr)` - Database error during insert, including a dangling `pack_id`
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let now = Utc::now();

        entity::card::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            pack_id: ActiveValue::Set(self.pack_id),
            name: ActiveValue::Set(self.name),
            card_number: ActiveValue::Set(self.card_number),
            rarity: ActiveValue::Set(self.rarity),
            card_type: ActiveValue::Set(self.card_type),
            description: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card without a pack.
pub async fn create_card(db: &DatabaseConnection) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db).build().await
}

/// Creates a card belonging to the provided pack.
pub async fn create_card_in_pack(
    db: &DatabaseConnection,
    pack_id: Uuid,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db).pack_id(pack_id).build().await
}
