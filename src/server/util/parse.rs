use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a resource ID taken from the request path.
///
/// A value that is not a UUID cannot identify any row, so it is reported the same way
/// as a missing row.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `resource` - Resource name used in the error message, e.g. `"Pack"`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed ID
/// - `Err(AppError::NotFound)` - Value is not a valid UUID
pub fn parse_resource_id(value: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}
