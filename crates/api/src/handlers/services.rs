//! Admin handlers for services sections and their cards.

use adsite_core::types::DbId;
use adsite_db::models::services::{CreateServiceCard, SaveServicesSection, UpdateServiceCard};
use adsite_db::models::ValidateInput;
use adsite_db::repositories::{ServiceCardRepo, ServicesSectionRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{ensure_deleted, ensure_page_exists, not_found};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_services_section_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if ServicesSectionRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found("ServicesSection", id))
    }
}

/// GET /api/v1/admin/pages/{id}/services-sections
pub async fn list_services_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_page_exists(&state.pool, page_id).await?;
    let sections = ServicesSectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/pages/{id}/services-sections
pub async fn create_services_section(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<SaveServicesSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_page_exists(&state.pool, page_id).await?;

    let section = ServicesSectionRepo::create(&state.pool, page_id, &input).await?;

    tracing::info!(section_id = section.id, page_id, "Services section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/admin/services-sections/{id}
pub async fn update_services_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveServicesSection>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let section = ServicesSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("ServicesSection", id))?;

    tracing::info!(section_id = id, "Services section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/services-sections/{id}
pub async fn delete_services_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ServicesSectionRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "ServicesSection", id)?;

    tracing::info!(section_id = id, "Services section deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/services-sections/{id}/cards
pub async fn list_cards(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_services_section_exists(&state.pool, section_id).await?;
    let cards = ServiceCardRepo::list_for_section(&state.pool, section_id).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// POST /api/v1/admin/services-sections/{id}/cards
pub async fn create_card(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(input): Json<CreateServiceCard>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;
    ensure_services_section_exists(&state.pool, section_id).await?;

    let card = ServiceCardRepo::create(&state.pool, section_id, &input).await?;

    tracing::info!(card_id = card.id, section_id, "Service card created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// PUT /api/v1/admin/service-cards/{id}
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServiceCard>,
) -> AppResult<impl IntoResponse> {
    input.validate_input()?;

    let card = ServiceCardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("ServiceCard", id))?;

    tracing::info!(card_id = id, "Service card updated");

    Ok(Json(DataResponse { data: card }))
}

/// DELETE /api/v1/admin/service-cards/{id}
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ServiceCardRepo::delete(&state.pool, id).await?;
    ensure_deleted(deleted, "ServiceCard", id)?;

    tracing::info!(card_id = id, "Service card deleted");

    Ok(StatusCode::NO_CONTENT)
}
