//! Rentable ad board inventory: types, labels, coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default latitude for new boards (Slavgorod town centre).
pub const DEFAULT_LATITUDE: f64 = 52.9994;

/// Default longitude for new boards (Slavgorod town centre).
pub const DEFAULT_LONGITUDE: f64 = 78.6459;

/// Kind of physical advertising carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdType {
    Billboard,
    LedScreen,
    Prismatron,
    Citylight,
    Pillar,
}

impl AdType {
    pub const ALL: [AdType; 5] = [
        AdType::Billboard,
        AdType::LedScreen,
        AdType::Prismatron,
        AdType::Citylight,
        AdType::Pillar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AdType::Billboard => "billboard",
            AdType::LedScreen => "led_screen",
            AdType::Prismatron => "prismatron",
            AdType::Citylight => "citylight",
            AdType::Pillar => "pillar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdType::Billboard => "Билборд",
            AdType::LedScreen => "LED-экран",
            AdType::Prismatron => "Призматрон",
            AdType::Citylight => "Ситилайт",
            AdType::Pillar => "Столб",
        }
    }
}

impl fmt::Display for AdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid ad type '{s}'. Must be one of: {}",
                    AdType::ALL.map(AdType::as_str).join(", ")
                ))
            })
    }
}

/// Display label for a stored ad type code.
///
/// Unknown codes are shown as-is rather than failing the whole page.
pub fn ad_type_label(code: &str) -> &str {
    match code.parse::<AdType>() {
        Ok(ad_type) => ad_type.label(),
        Err(_) => code,
    }
}

/// Validate a stored ad type code.
pub fn validate_ad_type(code: &str) -> Result<(), CoreError> {
    code.parse::<AdType>().map(|_| ())
}

/// Validate a latitude/longitude pair.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), CoreError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(CoreError::Validation(format!(
            "lat must be between -90 and 90, got {lat}"
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(CoreError::Validation(format!(
            "lon must be between -180 and 180, got {lon}"
        )));
    }
    Ok(())
}

/// Largest value that still fits `NUMERIC(10, 2)` after rounding to cents.
const MAX_PRICE: f64 = 99_999_999.995;

/// Validate a rental price: non-negative and fitting `NUMERIC(10, 2)`.
pub fn validate_price(price: Option<f64>) -> Result<(), CoreError> {
    let Some(price) = price else {
        return Ok(());
    };
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    if price >= MAX_PRICE {
        return Err(CoreError::Validation(
            "price must be at most 99999999.99".to_string(),
        ));
    }
    Ok(())
}
