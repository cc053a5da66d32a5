pub mod ad_boards;
pub mod features;
pub mod gallery;
pub mod map;
pub mod pages;
pub mod sections;
pub mod services;
pub mod site;
pub mod site_settings;
pub mod sliders;

use adsite_core::error::CoreError;
use adsite_core::types::DbId;
use adsite_db::models::page::Page;
use adsite_db::repositories::PageRepo;

use crate::error::{AppError, AppResult};

/// Verify that a page exists, returning the full row.
pub(crate) async fn ensure_page_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Page> {
    PageRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found("Page", id))
}

/// Build the 404 error for a missing row.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Turn a `delete` result into a 404 when nothing was removed.
pub(crate) fn ensure_deleted(deleted: bool, entity: &'static str, id: DbId) -> AppResult<()> {
    if deleted {
        Ok(())
    } else {
        Err(not_found(entity, id))
    }
}
