//! Public, server-rendered pages.

use adsite_core::error::CoreError;
use adsite_core::map_export::{export_markers, to_script_json};
use adsite_core::page::{validate_slug, HOME_SLUG};
use adsite_db::repositories::{AdBoardRepo, PageRepo};
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};

use crate::error::AppError;
use crate::site::SiteChrome;
use crate::state::AppState;
use crate::views::{
    render, HomePlaceholderTemplate, HtmlError, PageTemplate, RentalMapTemplate,
};

/// GET /
///
/// Render the published `home` page, or a placeholder when it does not exist.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let (chrome, page) = tokio::try_join!(
        SiteChrome::load(&state.pool),
        PageRepo::find_published_by_slug(&state.pool, HOME_SLUG),
    )?;

    let Some(page) = page else {
        tracing::debug!("No published home page, rendering placeholder");
        return Ok(render(&HomePlaceholderTemplate::new(
            &chrome,
            state.media_url(),
        ))?);
    };

    let content = PageRepo::load_content(&state.pool, page).await?;
    let template = PageTemplate::new(&content, &chrome, state.media_url())?;
    Ok(render(&template)?)
}

/// GET /{slug}/
pub async fn page_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, HtmlError> {
    let (chrome, page) = tokio::try_join!(
        SiteChrome::load(&state.pool),
        PageRepo::find_published_by_slug(&state.pool, &slug),
    )?;

    let page = page.ok_or(CoreError::NotFoundBySlug {
        entity: "Page",
        slug,
    })?;

    let content = PageRepo::load_content(&state.pool, page).await?;
    let template = PageTemplate::new(&content, &chrome, state.media_url())?;
    Ok(render(&template)?)
}

/// GET /{slug}
///
/// Canonical page URLs end with a slash. Only well-formed slugs are
/// redirected; anything else (such as a decoded `/evil.com`) is a 404.
pub async fn redirect_to_slash(Path(slug): Path<String>) -> Result<Redirect, HtmlError> {
    if validate_slug(&slug).is_err() {
        return Err(CoreError::NotFoundBySlug {
            entity: "Page",
            slug,
        }
        .into());
    }
    Ok(Redirect::permanent(&format!("/{slug}/")))
}

/// GET /rental-map/
pub async fn rental_map(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let (chrome, boards) = tokio::try_join!(
        SiteChrome::load(&state.pool),
        AdBoardRepo::list_active(&state.pool),
    )?;

    let markers = export_markers(&boards, state.media_url());
    let markers_json = to_script_json(&markers)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize map markers: {e}")))?;

    let template =
        RentalMapTemplate::new(&chrome, state.media_url(), markers.len(), markers_json);
    Ok(render(&template)?)
}
