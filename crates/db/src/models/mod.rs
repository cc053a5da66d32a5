//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! DTOs implement [`ValidateInput`], combining the declarative length rules
//! from `validator` with the domain checks from `adsite_core`.

use adsite_core::error::CoreError;
use validator::Validate;

pub mod ad_board;
pub mod features;
pub mod gallery;
pub mod page;
pub mod page_content;
pub mod sections;
pub mod services;
pub mod site_settings;
pub mod slider;

/// Write-time validation for admin payloads.
pub trait ValidateInput: Validate {
    /// Domain rules that cannot be expressed as `#[validate]` attributes.
    fn validate_domain(&self) -> Result<(), CoreError> {
        Ok(())
    }

    /// Run the declarative rules, then the domain rules.
    fn validate_input(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        self.validate_domain()
    }
}
