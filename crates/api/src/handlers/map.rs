use adsite_core::map_export::export_markers;
use adsite_db::repositories::AdBoardRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/map/ad-boards
///
/// Markers for every active ad board, the same records the rental map embeds.
pub async fn list_markers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let boards = AdBoardRepo::list_active(&state.pool).await?;
    let markers = export_markers(&boards, state.media_url());

    Ok(Json(DataResponse { data: markers }))
}
