//! Data transfer objects exchanged over the HTTP API.
//!
//! DTOs are the JSON shapes clients send and receive. Server-side domain models are
//! converted into these at the controller boundary.

pub mod api;
pub mod card;
pub mod deck;
pub mod pack;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Used with `#[serde(default, deserialize_with = "nullable")]` so that an absent field
/// yields `None` (leave unchanged) while `null` yields `Some(None)` (clear the column).
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
