//! SeaORM entity definitions for the card vault schema.
//!
//! Each module mirrors one table created by the `migration` crate. Entities are
//! only used inside the data layer; services and controllers work with the
//! domain models converted from them.

pub mod prelude;

pub mod card;
pub mod deck;
pub mod pack;
