use crate::server::error::AppError;

/// Ensures a required text field contains something other than whitespace.
///
/// The value is stored as given; trimming only decides validity.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Ensures an optional count is not negative.
pub fn require_non_negative(field: &str, value: Option<i32>) -> Result<(), AppError> {
    match value {
        Some(v) if v < 0 => Err(AppError::BadRequest(format!(
            "{} must not be negative",
            field
        ))),
        _ => Ok(()),
    }
}
