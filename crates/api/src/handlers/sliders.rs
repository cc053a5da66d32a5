//! Admin handlers for sliders and their slides.

use adsite_core::types::DbId;
use adsite_db::models::slider::{CreateSlide, CreateSliderSection, UpdateSlide, UpdateSliderSection};
use adsite_db::models::ValidateInput;
use adsite_db::repositories::{SlideRepo, SliderSectionRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{ensure_deleted, ensure_page_exists, not_found};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_slider_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if SliderSectionRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found("SliderSection", id))
    }
}

// ---------------------------------------------------------------------------
// Sliders
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pages/{id}/sliders
pub async fn list_sliders(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sliders = SliderSectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sliders }))
}

/// POST /api/v1/admin/pages/{id}/sliders
pub async fn create_slider(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<CreateSliderSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let slider = SliderSectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(slider_id = slider.id, page_id, "Slider created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: slider })))
}

/// PUT /api/v1/admin/sliders/{id}
pub async fn update_slider(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSliderSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let slider = SliderSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("SliderSection", id))?;

    tracing::info!(slider_id = id, "Slider updated");

    Ok(Json(DataResponse { data: slider }))
}

/// DELETE /api/v1/admin/sliders/{id}
///
/// Slides of the slider are removed with it.
pub async fn delete_slider(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SliderSectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "SliderSection", id)?;

    tracing::info!(slider_id = id, "Slider deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Slides
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/sliders/{id}/slides
pub async fn list_slides(
    State(state): State<AppState>,
    Path(slider_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_slider_exists(&state.pool, slider_id).await?;
    let slides = SlideRepo::list_for_slider(&state.pool, slider_id).await?;
    Ok(Json(DataResponse { data: slides }))
}

/// POST /api/v1/admin/sliders/{id}/slides
pub async fn create_slide(
    State(state): State<AppState>,
    Path(slider_id): Path<DbId>,
    Json(input): Json<CreateSlide>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_slider_exists(&state.pool, slider_id).await?;

    let slide = SlideRepo::create(&state.pool, slider_id, &input).await?;

    tracing::info!(slide_id = slide.id, slider_id, "Slide created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: slide })))
}

/// PUT /api/v1/admin/slides/{id}
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSlide>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let slide = SlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Slide", id))?;

    tracing::info!(slide_id = id, "Slide updated");

    Ok(Json(DataResponse { data: slide }))
}

/// DELETE /api/v1/admin/slides/{id}
pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SlideRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "Slide", id)?;

    tracing::info!(slide_id = id, "Slide deleted");

    Ok(StatusCode::NO_CONTENT)
}
