//! Admin handlers for the ad board inventory.

use adsite_core::types::DbId;
use adsite_db::models::ad_board::{AdBoardFilter, CreateAdBoard, UpdateAdBoard};
use adsite_db::models::ValidateInput;
use adsite_db::repositories::AdBoardRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{ensure_deleted, not_found};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/ad-boards
///
/// Inactive boards are included unless filtered out with `is_active=true`.
pub async fn list_ad_boards(
    State(state): State<AppState>,
    Query(filter): Query<AdBoardFilter>,
) -> AppResult<impl IntoResponse> {
    let boards = AdBoardRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: boards }))
}

/// POST /api/v1/admin/ad-boards
pub async fn create_ad_board(
    State(state): State<AppState>,
    Json(input): Json<CreateAdBoard>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let board = AdBoardRepo::create(&state.pool, &input).await?;

    tracing::info!(
        ad_board_id = board.id,
        ad_type = %board.ad_type,
        "Ad board created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: board })))
}

/// GET /api/v1/admin/ad-boards/{id}
pub async fn get_ad_board(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let board = AdBoardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("AdBoard", id))?;

    Ok(Json(DataResponse { data: board }))
}

/// PUT /api/v1/admin/ad-boards/{id}
pub async fn update_ad_board(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdBoard>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let board = AdBoardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("AdBoard", id))?;

    tracing::info!(ad_board_id = id, is_active = board.is_active, "Ad board updated");

    Ok(Json(DataResponse { data: board }))
}

/// DELETE /api/v1/admin/ad-boards/{id}
pub async fn delete_ad_board(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AdBoardRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "AdBoard", id)?;

    tracing::info!(ad_board_id = id, "Ad board deleted");

    Ok(StatusCode::NO_CONTENT)
}
