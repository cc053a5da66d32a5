//! Content administration routes mounted at `/admin`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{ad_boards, features, gallery, pages, sections, services, site_settings, sliders};
use crate::state::AppState;

/// Pages and the sections attached to them.
///
/// ```text
/// GET, POST          /pages
/// GET, PUT, DELETE   /pages/{id}
/// GET                /pages/{id}/content
/// GET, POST          /pages/{id}/hero-sections
/// GET, POST          /pages/{id}/text-image-sections
/// GET, POST          /pages/{id}/text-html-sections
/// GET, POST          /pages/{id}/html-sections
/// GET, POST          /pages/{id}/sliders
/// GET, POST          /pages/{id}/services-sections
/// GET, POST          /pages/{id}/features-sections
/// GET, POST          /pages/{id}/gallery-sections
/// ```
fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::create_page))
        .route(
            "/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/{id}/content", get(pages::get_page_content))
        .route(
            "/{id}/hero-sections",
            get(sections::list_hero_sections).post(sections::create_hero_section),
        )
        .route(
            "/{id}/text-image-sections",
            get(sections::list_text_image_sections).post(sections::create_text_image_section),
        )
        .route(
            "/{id}/text-html-sections",
            get(sections::list_text_html_sections).post(sections::create_text_html_section),
        )
        .route(
            "/{id}/html-sections",
            get(sections::list_html_sections).post(sections::create_html_section),
        )
        .route(
            "/{id}/sliders",
            get(sliders::list_sliders).post(sliders::create_slider),
        )
        .route(
            "/{id}/services-sections",
            get(services::list_services_sections).post(services::create_services_section),
        )
        .route(
            "/{id}/features-sections",
            get(features::list_features_sections).post(features::create_features_section),
        )
        .route(
            "/{id}/gallery-sections",
            get(gallery::list_gallery_sections).post(gallery::create_gallery_section),
        )
}

/// All admin routes.
///
/// ```text
/// /pages/...                          see page_router
/// PUT, DELETE  /hero-sections/{id}
/// PUT, DELETE  /text-image-sections/{id}
/// PUT, DELETE  /text-html-sections/{id}
/// PUT, DELETE  /html-sections/{id}
/// PUT, DELETE  /sliders/{id}
/// GET, POST    /sliders/{id}/slides
/// PUT, DELETE  /slides/{id}
/// PUT, DELETE  /services-sections/{id}
/// GET, POST    /services-sections/{id}/cards
/// PUT, DELETE  /service-cards/{id}
/// PUT, DELETE  /features-sections/{id}
/// GET, POST    /features-sections/{id}/features
/// PUT, DELETE  /features/{id}
/// PUT, DELETE  /gallery-sections/{id}
/// GET, POST    /gallery-sections/{id}/images
/// PUT, DELETE  /gallery-images/{id}
/// GET, POST    /ad-boards
/// GET, PUT, DELETE /ad-boards/{id}
/// GET, PUT, DELETE /site-settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/pages", page_router())
        // Single-row sections.
        .route(
            "/hero-sections/{id}",
            put(sections::update_hero_section).delete(sections::delete_hero_section),
        )
        .route(
            "/text-image-sections/{id}",
            put(sections::update_text_image_section).delete(sections::delete_text_image_section),
        )
        .route(
            "/text-html-sections/{id}",
            put(sections::update_text_html_section).delete(sections::delete_text_html_section),
        )
        .route(
            "/html-sections/{id}",
            put(sections::update_html_section).delete(sections::delete_html_section),
        )
        // Sliders.
        .route(
            "/sliders/{id}",
            put(sliders::update_slider).delete(sliders::delete_slider),
        )
        .route(
            "/sliders/{id}/slides",
            get(sliders::list_slides).post(sliders::create_slide),
        )
        .route(
            "/slides/{id}",
            put(sliders::update_slide).delete(sliders::delete_slide),
        )
        // Services.
        .route(
            "/services-sections/{id}",
            put(services::update_services_section).delete(services::delete_services_section),
        )
        .route(
            "/services-sections/{id}/cards",
            get(services::list_cards).post(services::create_card),
        )
        .route(
            "/service-cards/{id}",
            put(services::update_card).delete(services::delete_card),
        )
        // Features.
        .route(
            "/features-sections/{id}",
            put(features::update_features_section).delete(features::delete_features_section),
        )
        .route(
            "/features-sections/{id}/features",
            get(features::list_features).post(features::create_feature),
        )
        .route(
            "/features/{id}",
            put(features::update_feature).delete(features::delete_feature),
        )
        // Gallery.
        .route(
            "/gallery-sections/{id}",
            put(gallery::update_gallery_section).delete(gallery::delete_gallery_section),
        )
        .route(
            "/gallery-sections/{id}/images",
            get(gallery::list_images).post(gallery::create_image),
        )
        .route(
            "/gallery-images/{id}",
            put(gallery::update_image).delete(gallery::delete_image),
        )
        // Ad boards.
        .route(
            "/ad-boards",
            get(ad_boards::list_ad_boards).post(ad_boards::create_ad_board),
        )
        .route(
            "/ad-boards/{id}",
            get(ad_boards::get_ad_board)
                .put(ad_boards::update_ad_board)
                .delete(ad_boards::delete_ad_board),
        )
        // Site settings.
        .route(
            "/site-settings",
            get(site_settings::get_site_settings)
                .put(site_settings::save_site_settings)
                .delete(site_settings::delete_site_settings),
        )
}
