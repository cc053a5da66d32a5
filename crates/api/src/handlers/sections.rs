//! Admin handlers for the single-row section types: hero, text+image,
//! text+HTML and raw HTML.

use adsite_core::types::DbId;
use adsite_db::models::sections::{
    CreateHeroSection, CreateHtmlSection, CreateTextHtmlSection, CreateTextImageSection,
    UpdateHeroSection, UpdateHtmlSection, UpdateTextHtmlSection, UpdateTextImageSection,
};
use adsite_db::models::ValidateInput;
use adsite_db::repositories::{
    HeroSectionRepo, HtmlSectionRepo, TextHtmlSectionRepo, TextImageSectionRepo,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{ensure_deleted, ensure_page_exists, not_found};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pages/{id}/hero-sections
pub async fn list_hero_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sections = HeroSectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/pages/{id}/hero-sections
pub async fn create_hero_section(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<CreateHeroSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let section = HeroSectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(section_id = section.id, page_id, "Hero section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/admin/hero-sections/{id}
pub async fn update_hero_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let section = HeroSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("HeroSection", id))?;

    tracing::info!(section_id = id, "Hero section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/hero-sections/{id}
pub async fn delete_hero_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = HeroSectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "HeroSection", id)?;

    tracing::info!(section_id = id, "Hero section deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Text + image
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pages/{id}/text-image-sections
pub async fn list_text_image_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sections = TextImageSectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/pages/{id}/text-image-sections
///
/// An `internal_link_id` that names no page is rejected with 400.
pub async fn create_text_image_section(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<CreateTextImageSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let section = TextImageSectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(section_id = section.id, page_id, "Text+image section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/admin/text-image-sections/{id}
pub async fn update_text_image_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTextImageSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let section = TextImageSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("TextImageSection", id))?;

    tracing::info!(section_id = id, "Text+image section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/text-image-sections/{id}
pub async fn delete_text_image_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TextImageSectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "TextImageSection", id)?;

    tracing::info!(section_id = id, "Text+image section deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Text + HTML
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pages/{id}/text-html-sections
pub async fn list_text_html_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sections = TextHtmlSectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/pages/{id}/text-html-sections
pub async fn create_text_html_section(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<CreateTextHtmlSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let section = TextHtmlSectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(section_id = section.id, page_id, "Text+HTML section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/admin/text-html-sections/{id}
pub async fn update_text_html_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTextHtmlSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let section = TextHtmlSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("TextHtmlSection", id))?;

    tracing::info!(section_id = id, "Text+HTML section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/text-html-sections/{id}
pub async fn delete_text_html_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TextHtmlSectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "TextHtmlSection", id)?;

    tracing::info!(section_id = id, "Text+HTML section deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Raw HTML
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pages/{id}/html-sections
pub async fn list_html_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sections = HtmlSectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/pages/{id}/html-sections
pub async fn create_html_section(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<CreateHtmlSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let section = HtmlSectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(section_id = section.id, page_id, "HTML section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/admin/html-sections/{id}
pub async fn update_html_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHtmlSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let section = HtmlSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("HtmlSection", id))?;

    tracing::info!(section_id = id, "HTML section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/html-sections/{id}
pub async fn delete_html_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = HtmlSectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "HtmlSection", id)?;

    tracing::info!(section_id = id, "HTML section deleted");

    Ok(StatusCode::NO_CONTENT)
}
