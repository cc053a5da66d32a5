//! Gallery sections and their images.

use adsite_core::error::CoreError;
use adsite_core::sections::{validate_sort_order, Ordered};
use adsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `gallery_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GallerySection {
    pub id: DbId,
    pub page_id: DbId,
    pub title: String,
    pub sort_order: i32,
}

impl Ordered for GallerySection {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGallerySection {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateGallerySection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGallerySection {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateGallerySection {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

/// A row from the `gallery_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub section_id: DbId,
    pub image: String,
    pub title: String,
    pub description: String,
    pub sort_order: i32,
}

impl Ordered for GalleryImage {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryImage {
    #[validate(length(min = 1, max = 255))]
    pub image: String,
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for CreateGalleryImage {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGalleryImage {
    #[validate(length(min = 1, max = 255))]
    pub image: Option<String>,
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

impl ValidateInput for UpdateGalleryImage {
    fn validate_domain(&self) -> Result<(), CoreError> {
        validate_sort_order(self.sort_order.unwrap_or(0))
    }
}
