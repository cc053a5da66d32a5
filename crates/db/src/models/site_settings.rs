//! Site settings singleton model and DTO.

use adsite_core::site_settings::{
    DEFAULT_ADDRESS, DEFAULT_EMAIL, DEFAULT_PHONE, DEFAULT_SITE_NAME, DEFAULT_WORKING_HOURS,
};
use adsite_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// The single row of the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: i16,
    pub site_name: String,
    pub logo: Option<String>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full settings document written by `PUT /admin/site-settings`.
///
/// Omitted fields fall back to the site defaults, so every save replaces the
/// whole record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveSiteSettings {
    #[serde(default = "default_site_name")]
    #[validate(length(min = 1, max = 100))]
    pub site_name: String,
    #[validate(length(max = 255))]
    pub logo: Option<String>,
    #[serde(default = "default_phone")]
    #[validate(length(max = 20))]
    pub phone: String,
    #[serde(default = "default_email")]
    #[validate(length(max = 100))]
    pub email: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_working_hours")]
    #[validate(length(max = 100))]
    pub working_hours: String,
}

impl ValidateInput for SaveSiteSettings {}

impl Default for SaveSiteSettings {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            logo: None,
            phone: default_phone(),
            email: default_email(),
            address: default_address(),
            working_hours: default_working_hours(),
        }
    }
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_phone() -> String {
    DEFAULT_PHONE.to_string()
}

fn default_email() -> String {
    DEFAULT_EMAIL.to_string()
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_working_hours() -> String {
    DEFAULT_WORKING_HOURS.to_string()
}
