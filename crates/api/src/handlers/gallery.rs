//! Admin handlers for gallery sections and their images.

use adsite_core::types::DbId;
use adsite_db::models::gallery::{
    CreateGalleryImage, CreateGallerySection, UpdateGalleryImage, UpdateGallerySection,
};
use adsite_db::models::ValidateInput;
use adsite_db::repositories::{GalleryImageRepo, GallerySectionRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{ensure_deleted, ensure_page_exists, not_found};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_gallery_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if GallerySectionRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found("GallerySection", id))
    }
}

/// GET /api/v1/admin/pages/{id}/gallery-sections
pub async fn list_gallery_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sections = GallerySectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/pages/{id}/gallery-sections
pub async fn create_gallery_section(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<CreateGallerySection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let section = GallerySectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(section_id = section.id, page_id, "Gallery section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/admin/gallery-sections/{id}
pub async fn update_gallery_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGallerySection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let section = GallerySectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("GallerySection", id))?;

    tracing::info!(section_id = id, "Gallery section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/gallery-sections/{id}
pub async fn delete_gallery_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GallerySectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "GallerySection", id)?;

    tracing::info!(section_id = id, "Gallery section deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/gallery-sections/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_gallery_exists(&state.pool, section_id).await?;
    let images = GalleryImageRepo::list_for_section(&state.pool, section_id).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/v1/admin/gallery-sections/{id}/images
pub async fn create_image(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(input): Json<CreateGalleryImage>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_gallery_exists(&state.pool, section_id).await?;

    let image = GalleryImageRepo::create(&state.pool, section_id, &input).await?;

    tracing::info!(image_id = image.id, section_id, "Gallery image created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// PUT /api/v1/admin/gallery-images/{id}
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryImage>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let image = GalleryImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("GalleryImage", id))?;

    tracing::info!(image_id = id, "Gallery image updated");

    Ok(Json(DataResponse { data: image }))
}

/// DELETE /api/v1/admin/gallery-images/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GalleryImageRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "GalleryImage", id)?;

    tracing::info!(image_id = id, "Gallery image deleted");

    Ok(StatusCode::NO_CONTENT)
}
