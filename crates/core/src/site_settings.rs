//! Site-wide settings singleton.
//!
//! At most one settings row exists. The row always has id
//! [`SITE_SETTINGS_ID`] and writes are upserts keyed on it.

/// Fixed primary key of the settings row.
pub const SITE_SETTINGS_ID: i16 = 1;

pub const DEFAULT_SITE_NAME: &str = "Триал";
pub const DEFAULT_PHONE: &str = "+7 (123) 456-78-90";
pub const DEFAULT_EMAIL: &str = "info@trial-agency.ru";
pub const DEFAULT_ADDRESS: &str = "г. Москва, ул. Рекламная, д. 123";
pub const DEFAULT_WORKING_HOURS: &str = "Пн-Пт: 9:00 - 18:00";
