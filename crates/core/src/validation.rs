//! Shared write-time validation helpers.
//!
//! Field-specific rules (slug charset, colours, ranges) that the admin
//! endpoints apply before anything reaches the database. Length limits are
//! declared on the DTOs themselves.

use crate::error::CoreError;

/// Validate that a value falls within `[0.0, 1.0]`.
///
/// Returns a `CoreError::Validation` naming the field if out of range.
pub fn validate_unit_range(value: f64, name: &str) -> Result<(), CoreError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0.0 and 1.0, got {value}"
        )));
    }
    Ok(())
}

/// Validate that an integer used for ordering is not negative.
pub fn validate_non_negative(value: i32, name: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Validate a `#RRGGBB` colour string.
pub fn validate_hex_color(value: &str, name: &str) -> Result<(), CoreError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(CoreError::Validation(format!(
            "{name} must be a #RRGGBB colour, got '{value}'"
        )));
    }
    Ok(())
}
