//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pack holding `count` cards.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of cards to insert into the pack
///
/// # Returns
/// - `Ok((pack, cards))` - The created pack and its cards in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pack_with_cards(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::pack::Model, Vec<entity::card::Model>), DbErr> {
    let pack = crate::factory::pack::create_pack(db).await?;

    let mut cards = Vec::with_capacity(count);
    for _ in 0..count {
        cards.push(crate::factory::card::create_card_in_pack(db, pack.id).await?);
    }

    Ok((pack, cards))
}
