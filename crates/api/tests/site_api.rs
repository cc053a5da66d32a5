//! Integration tests for the public, server-rendered routes and the map JSON.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, create_page, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_without_page_or_settings_renders_fallback(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Триал - Рекламное агентство"));
    assert!(html.contains("Рекламное агентство полного цикла"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_placeholder_uses_configured_site_name(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/site-settings",
        json!({"site_name": "Медиа Плюс", "phone": "+7 900 000-00-00"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(get(common::build_test_app(pool), "/").await).await;
    assert!(html.contains("Медиа Плюс"));
    assert!(!html.contains("Триал - Рекламное агентство"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unpublished_home_falls_back_to_placeholder(pool: PgPool) {
    create_page(
        &pool,
        json!({"title": "Черновик главной", "slug": "home", "is_published": false}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(!html.contains("Черновик главной"));
    assert!(html.contains("Триал - Рекламное агентство"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_home_renders_its_sections(pool: PgPool) {
    let page_id = create_page(
        &pool,
        json!({"title": "Главная", "slug": "home", "category": "main"}),
    )
    .await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/pages/{page_id}/hero-sections"),
        json!({"title": "Реклама, которая работает", "subtitle": "С 2005 года"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let html = body_text(get(common::build_test_app(pool), "/").await).await;
    assert!(html.contains("Реклама, которая работает"));
}

// ---------------------------------------------------------------------------
// Page detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_detail_renders_sections_in_order(pool: PgPool) {
    let page_id = create_page(
        &pool,
        json!({"title": "Наружная реклама", "slug": "outdoor", "category": "outdoor"}),
    )
    .await;
    let base = format!("/api/v1/admin/pages/{page_id}");

    post_json(
        common::build_test_app(pool.clone()),
        &format!("{base}/html-sections"),
        json!({"content": "<div id=\"second\"></div>", "sort_order": 2}),
    )
    .await;
    post_json(
        common::build_test_app(pool.clone()),
        &format!("{base}/gallery-sections"),
        json!({"title": "Наши работы", "sort_order": 1}),
    )
    .await;
    post_json(
        common::build_test_app(pool.clone()),
        &format!("{base}/html-sections"),
        json!({"content": "<div id=\"first\"></div>", "sort_order": 0}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/outdoor/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let first = html.find("<div id=\"first\"></div>").unwrap();
    let gallery = html.find("Наши работы").unwrap();
    let second = html.find("<div id=\"second\"></div>").unwrap();
    assert!(first < gallery && gallery < second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unpublished_page_returns_not_found_page(pool: PgPool) {
    create_page(
        &pool,
        json!({"title": "Скрытая", "slug": "hidden", "is_published": false}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/hidden/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Страница не найдена"));
    assert!(!html.contains("Скрытая"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_slug_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/nope/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_without_trailing_slash_redirects(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/outdoor").await;

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()["location"], "/outdoor/");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn encoded_slash_slug_is_not_redirected_off_site(pool: PgPool) {
    for uri in ["/%2Fevil.com", "/%2F%2Fevil.com"] {
        let response = get(common::build_test_app(pool.clone()), uri).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(response.headers().get("location").is_none(), "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn menu_lists_published_menu_pages_only(pool: PgPool) {
    create_page(
        &pool,
        json!({"title": "Баннеры", "slug": "banners", "category": "outdoor", "show_in_menu": true}),
    )
    .await;
    create_page(
        &pool,
        json!({"title": "Вывески", "slug": "signs", "category": "outdoor", "show_in_menu": false}),
    )
    .await;
    create_page(
        &pool,
        json!({"title": "История", "slug": "history", "category": "about", "show_in_menu": true}),
    )
    .await;

    let html = body_text(get(common::build_test_app(pool), "/").await).await;

    assert!(html.contains("Наружная реклама"));
    assert!(html.contains("Баннеры"));
    assert!(!html.contains("Вывески"));
    assert!(!html.contains("История"));
}

// ---------------------------------------------------------------------------
// Rental map
// ---------------------------------------------------------------------------

async fn seed_boards(pool: &PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/ad-boards",
        json!({
            "title": "Щит у рынка",
            "ad_type": "billboard",
            "address": "ул. Ленина, 12",
            "photo": "adboards/market.jpg",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/ad-boards",
        json!({
            "title": "Экран на вокзале",
            "ad_type": "led_screen",
            "address": "Привокзальная пл., 1",
            "price": 10.5,
            "is_active": false,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rental_map_embeds_active_boards(pool: PgPool) {
    seed_boards(&pool).await;

    let response = get(common::build_test_app(pool), "/rental-map/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Аренда рекламных носителей в Славгороде"));
    assert!(html.contains("\"title\":\"Щит у рынка\""));
    assert!(html.contains("\"ad_type_display\":\"Билборд\""));
    assert!(html.contains("\"price\":null"));
    assert!(!html.contains("Экран на вокзале"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn map_json_lists_active_markers(pool: PgPool) {
    seed_boards(&pool).await;

    let response = get(common::build_test_app(pool), "/api/v1/map/ad-boards").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let markers = json["data"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["title"], "Щит у рынка");
    assert_eq!(markers[0]["ad_type"], "billboard");
    assert!(markers[0]["price"].is_null());
    assert_eq!(markers[0]["photo"], "/media/adboards/market.jpg");
    assert_eq!(markers[0]["lat"], 52.9994);
}
