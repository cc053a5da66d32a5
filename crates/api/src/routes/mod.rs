pub mod admin;
pub mod health;
pub mod site;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET /map/ad-boards          active ad board markers
/// /admin/...                  content administration (see routes::admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/map/ad-boards", get(handlers::map::list_markers))
        .nest("/admin", admin::router())
}
