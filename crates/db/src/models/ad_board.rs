//! Ad board entity model and DTOs.

use adsite_core::ad_board::{
    validate_ad_type, validate_coordinates, validate_price, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};
use adsite_core::error::CoreError;
use adsite_core::map_export::MapBoard;
use adsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `ad_boards` table.
///
/// `price` is stored as `NUMERIC(10, 2)` and read back as a plain `f64`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdBoard {
    pub id: DbId,
    pub title: String,
    pub ad_type: String,
    pub address: String,
    pub description: String,
    pub rental_terms: String,
    pub price: Option<f64>,
    pub contact_info: String,
    pub photo: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AdBoard {
    /// Display label of the board type.
    pub fn ad_type_display(&self) -> &str {
        adsite_core::ad_board::ad_type_label(&self.ad_type)
    }
}

impl MapBoard for AdBoard {
    fn id(&self) -> DbId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ad_type(&self) -> &str {
        &self.ad_type
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rental_terms(&self) -> &str {
        &self.rental_terms
    }

    fn price(&self) -> Option<f64> {
        self.price
    }

    fn contact_info(&self) -> &str {
        &self.contact_info
    }

    fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// DTO for creating a new ad board.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdBoard {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub ad_type: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub description: Option<String>,
    pub rental_terms: Option<String>,
    pub price: Option<f64>,
    pub contact_info: Option<String>,
    #[validate(length(max = 255))]
    pub photo: Option<String>,
    /// Defaults to the town centre if omitted.
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

impl ValidateInput for CreateAdBoard {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_ad_type(&self.ad_type)?;
        validate_price(self.price)?;
        validate_coordinates(
            self.lat.unwrap_or(DEFAULT_LATITUDE),
            self.lon.unwrap_or(DEFAULT_LONGITUDE),
        )
    }
}

/// DTO for updating an ad board. All fields are optional.
///
/// `clear_price` / `clear_photo` unset the nullable columns; a plain `None`
/// leaves them unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAdBoard {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub ad_type: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    pub description: Option<String>,
    pub rental_terms: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub clear_price: bool,
    pub contact_info: Option<String>,
    #[validate(length(max = 255))]
    pub photo: Option<String>,
    #[serde(default)]
    pub clear_photo: bool,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub is_active: Option<bool>,
}

impl ValidateInput for UpdateAdBoard {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(ad_type) = &self.ad_type {
            validate_ad_type(ad_type)?;
        }
        validate_price(self.price)?;
        validate_coordinates(
            self.lat.unwrap_or(DEFAULT_LATITUDE),
            self.lon.unwrap_or(DEFAULT_LONGITUDE),
        )
    }
}

/// Admin list filters for ad boards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdBoardFilter {
    pub ad_type: Option<String>,
    pub is_active: Option<bool>,
    /// Case-insensitive match on title, address and description.
    pub search: Option<String>,
}
