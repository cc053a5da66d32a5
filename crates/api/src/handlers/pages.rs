//! Admin handlers for pages.

use adsite_core::types::DbId;
use adsite_db::models::page::{CreatePage, PageFilter, UpdatePage};
use adsite_db::models::ValidateInput;
use adsite_db::repositories::PageRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{ensure_deleted, ensure_page_exists, not_found};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/pages
///
/// List pages, optionally filtered by category, flags and a search term.
pub async fn list_pages(
    State(state): State<AppState>,
    Query(filter): Query<PageFilter>,
) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// POST /api/v1/admin/pages
pub async fn create_page(
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let page = PageRepo::create(&state.pool, &input).await?;

    tracing::info!(page_id = page.id, slug = %page.slug, "Page created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// GET /api/v1/admin/pages/{id}
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let page = ensure_page_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: page }))
}

/// PUT /api/v1/admin/pages/{id}
pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let page = PageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Page", id))?;

    tracing::info!(page_id = id, slug = %page.slug, "Page updated");

    Ok(Json(DataResponse { data: page }))
}

/// DELETE /api/v1/admin/pages/{id}
///
/// Sections of the page are removed with it; links from other pages' sections
/// to this page are cleared.
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PageRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "Page", id)?;

    tracing::info!(page_id = id, "Page deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/pages/{id}/content
///
/// The page with every section and child item in display order.
pub async fn get_page_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let page = ensure_page_exists(&state.pool, id).await?;
    let content = PageRepo::load_content(&state.pool, page).await?;
    Ok(Json(DataResponse { data: content }))
}
