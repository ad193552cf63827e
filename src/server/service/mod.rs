//! Business logic layer between controllers and repositories.
//!
//! Services validate operation parameters, call repositories, and turn repository
//! outcomes into `AppError`s: missing rows become `NotFound`, failed writes become
//! `BadRequest`, and failed reads stay database errors (500).

pub mod card;
pub mod deck;
pub mod pack;
