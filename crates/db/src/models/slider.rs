//! Slider sections and their slides.

use adsite_core::error::CoreError;
use adsite_core::links::Linkable;
use adsite_core::sections::{validate_autoplay_interval, validate_sort_order, Ordered};
use adsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `slider_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SliderSection {
    pub id: DbId,
    pub page_id: DbId,
    pub autoplay: bool,
    /// Milliseconds between slides when `autoplay` is on.
    pub autoplay_interval: i32,
    pub show_controls: bool,
    pub show_indicators: bool,
    pub sort_order: i32,
}

impl Ordered for SliderSection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateSliderSection {
    pub autoplay: Option<bool>,
    pub autoplay_interval: Option<i32>,
    pub show_controls: Option<bool>,
    pub show_indicators: Option<bool>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateSliderSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(interval) = self.autoplay_interval {
            validate_autoplay_interval(interval)?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

/// Same shape as the create payload; absent fields are left untouched.
pub type UpdateSliderSection = CreateSliderSection;

/// A row from the `slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slide {
    pub id: DbId,
    pub slider_id: DbId,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub button_text: String,
    pub internal_link_id: Option<DbId>,
    pub internal_link_slug: Option<String>,
    pub external_link: String,
    /// Tailwind gradient classes painted behind the slide text.
    pub background_color: String,
    pub sort_order: i32,
}

impl Linkable for Slide {
    fn internal_link_slug(&self) -> Option<&str> {
        self.internal_link_slug.as_deref()
    }

    fn external_link(&self) -> &str {
        &self.external_link
    }
}

impl Ordered for Slide {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSlide {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub image: String,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    #[validate(length(max = 100))]
    pub background_color: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateSlide {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSlide {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub image: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[serde(default)]
    pub clear_internal_link: bool,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    #[validate(length(max = 100))]
    pub background_color: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateSlide {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}
