//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let pack = factory::create_pack(&db).await?;
//!     let card = factory::create_card_in_pack(&db, pack.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let pack = factory::pack::PackFactory::new(&db)
//!     .name("Base Set")
//!     .set_code("BS")
//!     .card_count(102)
//!     .build()
//!     .await?;
//! ```

pub mod card;
pub mod deck;
pub mod helpers;
pub mod pack;

pub use card::{create_card, create_card_in_pack};
pub use deck::create_deck;
pub use pack::create_pack;
