//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories return raw `DbErr`s; deciding which failures are the client's fault is
//! left to the service layer.

pub mod card;
pub mod deck;
pub mod pack;

#[cfg(test)]
mod test;
