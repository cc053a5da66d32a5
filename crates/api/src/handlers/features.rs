//! Admin handlers for features sections and their items.

use adsite_core::types::DbId;
use adsite_db::models::features::{CreateFeature, SaveFeaturesSection, UpdateFeature};
use adsite_db::models::ValidateInput;
use adsite_db::repositories::{FeatureRepo, FeaturesSectionRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{ensure_deleted, ensure_page_exists, not_found};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_features_section_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if FeaturesSectionRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found("FeaturesSection", id))
    }
}

/// GET /api/v1/admin/pages/{id}/features-sections
pub async fn list_features_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sections = FeaturesSectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/pages/{id}/features-sections
pub async fn create_features_section(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<SaveFeaturesSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let section = FeaturesSectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(section_id = section.id, page_id, "Features section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/admin/features-sections/{id}
pub async fn update_features_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveFeaturesSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let section = FeaturesSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("FeaturesSection", id))?;

    tracing::info!(section_id = id, "Features section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/features-sections/{id}
pub async fn delete_features_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FeaturesSectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "FeaturesSection", id)?;

    tracing::info!(section_id = id, "Features section deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/features-sections/{id}/features
pub async fn list_features(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_features_section_exists(&state.pool, section_id).await?;
    let features = FeatureRepo::list_for_section(&state.pool, section_id).await?;
    Ok(Json(DataResponse { data: features }))
}

/// POST /api/v1/admin/features-sections/{id}/features
pub async fn create_feature(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(input): Json<CreateFeature>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_features_section_exists(&state.pool, section_id).await?;

    let feature = FeatureRepo::create(&state.pool, section_id, &input).await?;

    tracing::info!(feature_id = feature.id, section_id, "Feature created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: feature })))
}

/// PUT /api/v1/admin/features/{id}
pub async fn update_feature(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeature>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let feature = FeatureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Feature", id))?;

    tracing::info!(feature_id = id, "Feature updated");

    Ok(Json(DataResponse { data: feature }))
}

/// DELETE /api/v1/admin/features/{id}
pub async fn delete_feature(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FeatureRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "Feature", id)?;

    tracing::info!(feature_id = id, "Feature deleted");

    Ok(StatusCode::NO_CONTENT)
}
