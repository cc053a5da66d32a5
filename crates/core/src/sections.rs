//! Section type constants, defaults and validation.
//!
//! Every section (and every child row of a section: slides, service cards,
//! features, gallery images) carries a `sort_order`. Display order is
//! `sort_order` ascending with ties broken by id, i.e. insertion order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{validate_hex_color, validate_non_negative, validate_unit_range};

/// Default hero background gradient (Tailwind classes).
pub const DEFAULT_HERO_GRADIENT: &str = "from-orange-800 to-orange-600";

/// Default hero gradient opacity (fully opaque).
pub const DEFAULT_GRADIENT_OPACITY: f64 = 1.0;

/// Default hero text colour.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Default slide background gradient.
pub const DEFAULT_SLIDE_GRADIENT: &str = "from-blue-800 to-blue-600";

/// Default slider autoplay interval in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: i32 = 5000;

/// Default icon colour for service cards and features.
pub const DEFAULT_ICON_COLOR: &str = "#3B82F6";

/// Default heading of a services section.
pub const DEFAULT_SERVICES_TITLE: &str = "Наши услуги";

/// Default heading of a features section.
pub const DEFAULT_FEATURES_TITLE: &str = "Почему выбирают нас";

/// Which side of a two-column section the media (image or HTML) sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaPosition {
    Left,
    #[default]
    Right,
}

impl MediaPosition {
    pub const ALL: [MediaPosition; 2] = [MediaPosition::Left, MediaPosition::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaPosition::Left => "left",
            MediaPosition::Right => "right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaPosition::Left => "Слева",
            MediaPosition::Right => "Справа",
        }
    }
}

impl fmt::Display for MediaPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaPosition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid position '{s}'. Must be one of: left, right"
                ))
            })
    }
}

/// Validate a stored position code.
pub fn validate_position(code: &str) -> Result<(), CoreError> {
    code.parse::<MediaPosition>().map(|_| ())
}

/// Validate the styling fields of a hero section.
pub fn validate_hero_style(gradient_opacity: f64, text_color: &str) -> Result<(), CoreError> {
    validate_unit_range(gradient_opacity, "gradient_opacity")?;
    validate_hex_color(text_color, "text_color")
}

/// Validate a slider's autoplay interval.
pub fn validate_autoplay_interval(interval_ms: i32) -> Result<(), CoreError> {
    if interval_ms <= 0 {
        return Err(CoreError::Validation(format!(
            "autoplay_interval must be a positive number of milliseconds, got {interval_ms}"
        )));
    }
    Ok(())
}

/// Validate a section or child row's sort order.
pub fn validate_sort_order(sort_order: i32) -> Result<(), CoreError> {
    validate_non_negative(sort_order, "sort_order")
}

/// A row that is displayed in `sort_order`.
pub trait Ordered {
    fn id(&self) -> DbId;
    fn sort_order(&self) -> i32;
}

/// Sort rows into display order: `sort_order` ascending, then id.
pub fn sort_for_display<T: Ordered>(rows: &mut [T]) {
    rows.sort_by_key(|row| (row.sort_order(), row.id()));
}
