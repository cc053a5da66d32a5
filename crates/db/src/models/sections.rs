//! Single-row page sections: hero, text+image, text+HTML and raw HTML.
//!
//! Rows that can link somewhere carry the joined `internal_link_slug` of the
//! target page so [`Linkable::link`] resolves without another query.

use adsite_core::error::CoreError;
use adsite_core::links::Linkable;
use adsite_core::sections::{
    validate_hero_style, validate_position, validate_sort_order, Ordered,
    DEFAULT_GRADIENT_OPACITY, DEFAULT_TEXT_COLOR,
};
use adsite_core::types::DbId;
use adsite_core::validation::{validate_hex_color, validate_unit_range};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// A row from the `hero_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSection {
    pub id: DbId,
    pub page_id: DbId,
    pub title: String,
    pub subtitle: String,
    pub background_image: Option<String>,
    pub background_gradient: String,
    pub gradient_opacity: f64,
    pub text_color: String,
    pub sort_order: i32,
}

impl Ordered for HeroSection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroSection {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub subtitle: String,
    #[validate(length(max = 255))]
    pub background_image: Option<String>,
    #[validate(length(max = 100))]
    pub background_gradient: Option<String>,
    pub gradient_opacity: Option<f64>,
    pub text_color: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateHeroSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_hero_style(
            self.gradient_opacity.unwrap_or(DEFAULT_GRADIENT_OPACITY),
            self.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR),
        )?;
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHeroSection {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[validate(length(max = 255))]
    pub background_image: Option<String>,
    #[serde(default)]
    pub clear_background_image: bool,
    #[validate(length(max = 100))]
    pub background_gradient: Option<String>,
    pub gradient_opacity: Option<f64>,
    pub text_color: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateHeroSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(opacity) = self.gradient_opacity {
            validate_unit_range(opacity, "gradient_opacity")?;
        }
        if let Some(color) = &self.text_color {
            validate_hex_color(color, "text_color")?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Text + image
// ---------------------------------------------------------------------------

/// A row from the `text_image_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TextImageSection {
    pub id: DbId,
    pub page_id: DbId,
    pub title: String,
    pub content: String,
    pub image: String,
    pub image_position: String,
    pub button_text: String,
    pub internal_link_id: Option<DbId>,
    pub internal_link_slug: Option<String>,
    pub external_link: String,
    pub sort_order: i32,
}

impl Linkable for TextImageSection {
    fn internal_link_slug(&self) -> Option<&str> {
        self.internal_link_slug.as_deref()
    }

    fn external_link(&self) -> &str {
        &self.external_link
    }
}

impl Ordered for TextImageSection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTextImageSection {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub content: String,
    #[validate(length(min = 1, max = 255))]
    pub image: String,
    /// `left` or `right`; defaults to `right`.
    pub image_position: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateTextImageSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(position) = &self.image_position {
            validate_position(position)?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTextImageSection {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub content: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub image: Option<String>,
    pub image_position: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[serde(default)]
    pub clear_internal_link: bool,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateTextImageSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(position) = &self.image_position {
            validate_position(position)?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Text + HTML
// ---------------------------------------------------------------------------

/// A row from the `text_html_sections` table.
///
/// `html_content` is trusted admin input and rendered unescaped.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TextHtmlSection {
    pub id: DbId,
    pub page_id: DbId,
    pub title: String,
    pub content: String,
    pub html_content: String,
    pub html_position: String,
    pub button_text: String,
    pub internal_link_id: Option<DbId>,
    pub internal_link_slug: Option<String>,
    pub external_link: String,
    pub sort_order: i32,
}

impl Linkable for TextHtmlSection {
    fn internal_link_slug(&self) -> Option<&str> {
        self.internal_link_slug.as_deref()
    }

    fn external_link(&self) -> &str {
        &self.external_link
    }
}

impl Ordered for TextHtmlSection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTextHtmlSection {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub content: String,
    pub html_content: String,
    /// `left` or `right`; defaults to `right`.
    pub html_position: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateTextHtmlSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(position) = &self.html_position {
            validate_position(position)?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTextHtmlSection {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub html_content: Option<String>,
    pub html_position: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    pub internal_link_id: Option<DbId>,
    #[serde(default)]
    pub clear_internal_link: bool,
    #[validate(length(max = 500))]
    pub external_link: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateTextHtmlSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(position) = &self.html_position {
            validate_position(position)?;
        }
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Raw HTML
// ---------------------------------------------------------------------------

/// A row from the `html_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HtmlSection {
    pub id: DbId,
    pub page_id: DbId,
    pub content: String,
    pub sort_order: i32,
}

impl Ordered for HtmlSection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHtmlSection {
    pub content: String,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateHtmlSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHtmlSection {
    pub content: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateHtmlSection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}
