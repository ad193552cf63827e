//! HTTP request handlers.
//!
//! Controllers extract path, query, and body inputs, convert DTOs into parameter models,
//! call the matching service, and convert the resulting domain models back into DTOs.
//! Every handler returns `Result<_, AppError>` so failures share one JSON error shape.

pub mod card;
pub mod deck;
pub mod pack;

#[cfg(test)]
mod test;
