use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed API response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
