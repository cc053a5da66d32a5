//! Domain logic for the agency site backend.
//!
//! Everything in this crate is pure: enums and their display labels,
//! write-time validation, link resolution, the navigation menu projection
//! and the ad board map export. The database and HTTP crates build on it.

pub mod ad_board;
pub mod error;
pub mod links;
pub mod map_export;
pub mod media;
pub mod menu;
pub mod page;
pub mod sections;
pub mod site_settings;
pub mod types;
pub mod validation;
