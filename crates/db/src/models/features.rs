//! Features sections ("why choose us") and their feature items.

use adsite_core::error::CoreError;
use adsite_core::sections::{validate_sort_order, Ordered};
use adsite_core::types::DbId;
use adsite_core::validation::validate_hex_color;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `features_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeaturesSection {
    pub id: DbId,
    pub page_id: DbId,
    pub main_title: String,
    pub sort_order: i32,
}

impl Ordered for FeaturesSection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SaveFeaturesSection {
    #[validate(length(min = 1, max = 200))]
    pub main_title: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for SaveFeaturesSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

/// A row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub section_id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub icon_color: String,
    pub sort_order: i32,
}

impl Ordered for Feature {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeature {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, max = 50))]
    pub icon: String,
    pub icon_color: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateFeature {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(color) = &self.icon_color {
            validate_hex_color(color, "icon_color")?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeature {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateFeature {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(color) = &self.icon_color {
            validate_hex_color(color, "icon_color")?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}
