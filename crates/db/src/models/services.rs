//! Services sections: a heading over a grid of linkable service cards.

use adsite_core::error::CoreError;
use adsite_core::links::Linkable;
use adsite_core::sections::{validate_sort_order, Ordered};
use adsite_core::types::DbId;
use adsite_core::validation::validate_hex_color;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `services_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServicesSection {
    pub id: DbId,
    pub page_id: DbId,
    pub main_title: String,
    pub sort_order: i32,
}

impl Ordered for ServicesSection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

/// Create or update payload for a services section.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SaveServicesSection {
    #[validate(length(min = 1, max = 200))]
    pub main_title: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for SaveServicesSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

/// A row from the `service_cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceCard {
    pub id: DbId,
    pub section_id: DbId,
    pub title: String,
    pub description: String,
    /// Icon name from the front-end icon set.
    pub icon: String,
    pub icon_color: String,
    pub button_text: String,
    pub internal_link_id: Option<DbId>,
    pub internal_link_slug: Option<String>,
    pub external_link: String,
    pub sort_order: i32,
}

impl Linkable for ServiceCard {
    fn internal_link_slug(&self) -> Option<&str> {
        self.internal_link_slug.as_deref()
    }

    fn external_link(&self) -> &str {
        &self.external_link
    }
}

impl Ordered for ServiceCard {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceCard {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, max = 50))]
    pub icon: String,
    pub icon_color: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateServiceCard {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(color) = &self.icon_color {
            validate_hex_color(color, "icon_color")?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServiceCard {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[serde(default)]
    pub clear_internal_link: bool,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateServiceCard {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(color) = &self.icon_color {
            validate_hex_color(color, "icon_color")?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}
