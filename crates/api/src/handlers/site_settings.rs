//! Admin handlers for the site settings singleton.

use adsite_core::error::CoreError;
use adsite_core::site_settings::SITE_SETTINGS_ID;
use adsite_db::models::site_settings::SaveSiteSettings;
use adsite_db::models::ValidateInput;
use adsite_db::repositories::SiteSettingsRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn settings_not_found() -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SiteSettings",
        id: SITE_SETTINGS_ID.into(),
    })
}

/// GET /api/v1/admin/site-settings
///
/// 404 until the settings have been saved once.
pub async fn get_site_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(settings_not_found)?;

    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/admin/site-settings
///
/// Create or replace the single settings record.
pub async fn save_site_settings(
    State(state): State<AppState>,
    Json(input): Json<SaveSiteSettings>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let settings = SiteSettingsRepo::save(&state.pool, &input).await?;

    tracing::info!(site_name = %settings.site_name, "Site settings saved");

    Ok(Json(DataResponse { data: settings }))
}

/// DELETE /api/v1/admin/site-settings
///
/// Public pages fall back to the built-in defaults afterwards.
pub async fn delete_site_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    if !SiteSettingsRepo::delete(&state.pool).await? {
        return Err(settings_not_found());
    }

    tracing::info!("Site settings deleted");

    Ok(StatusCode::NO_CONTENT)
}
