//! Page entity model and DTOs.

use adsite_core::error::CoreError;
use adsite_core::menu::MenuCandidate;
use adsite_core::page::{validate_category, validate_slug, PageCategory};
use adsite_core::sections::validate_sort_order;
use adsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub meta_description: String,
    pub category: String,
    pub is_published: bool,
    pub show_in_menu: bool,
    pub menu_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Page {
    /// Public URL of the page.
    pub fn url(&self) -> String {
        adsite_core::links::page_url(&self.slug)
    }
}

impl MenuCandidate for Page {
    fn title(&self) -> &str {
        &self.title
    }

    fn menu_order(&self) -> i32 {
        self.menu_order
    }

    fn is_published(&self) -> bool {
        self.is_published
    }

    fn show_in_menu(&self) -> bool {
        self.show_in_menu
    }

    fn category(&self) -> Option<PageCategory> {
        self.category.parse().ok()
    }
}

/// DTO for creating a new page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePage {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub slug: String,
    pub meta_description: Option<String>,
    /// Defaults to `other` if omitted.
    pub category: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_published: Option<bool>,
    /// Defaults to `false` if omitted.
    pub show_in_menu: Option<bool>,
    pub menu_order: Option<i32>,
}

impl ValidateInput for CreatePage {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_slug(&self.slug)?;
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(menu_order) = self.menu_order {
            validate_sort_order(menu_order)?;
        }
        Ok(())
    }
}

/// DTO for updating an existing page. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePage {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub meta_description: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub show_in_menu: Option<bool>,
    pub menu_order: Option<i32>,
}

impl ValidateInput for UpdatePage {
    fn validate_domain(&self) -> Result<(), CoreError> {
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(menu_order) = self.menu_order {
            validate_sort_order(menu_order)?;
        }
        Ok(())
    }
}

/// Admin list filters for pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageFilter {
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub show_in_menu: Option<bool>,
    /// Case-insensitive match on title, slug and meta description.
    pub search: Option<String>,
}
