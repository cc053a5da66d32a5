//! Public, server-rendered site routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Public pages mounted at the root.
///
/// ```text
/// GET /              -> home
/// GET /rental-map/   -> rental_map
/// GET /{slug}/       -> page_detail
/// GET /{slug}        -> redirect_to_slash
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::home))
        .route("/rental-map/", get(site::rental_map))
        .route("/{slug}/", get(site::page_detail))
        .route("/{slug}", get(site::redirect_to_slash))
}
