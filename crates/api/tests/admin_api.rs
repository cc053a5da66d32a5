//! HTTP-level integration tests for the admin JSON API.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_page, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_page_applies_defaults(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/admin/pages",
        json!({"title": "Контакты", "slug": "contacts"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let page = &body_json(response).await["data"];
    assert!(page["id"].is_number());
    assert_eq!(page["category"], "other");
    assert_eq!(page["is_published"], true);
    assert_eq!(page["show_in_menu"], false);
    assert_eq!(page["meta_description"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_slug_returns_409(pool: PgPool) {
    create_page(&pool, json!({"title": "О нас", "slug": "about"})).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/admin/pages",
        json!({"title": "О компании", "slug": "about"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_page_payloads_return_400(pool: PgPool) {
    for body in [
        json!({"title": "Пробел", "slug": "with space"}),
        json!({"title": "Категория", "slug": "cat", "category": "billboards"}),
        json!({"title": "", "slug": "empty-title"}),
    ] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/admin/pages",
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_lifecycle(pool: PgPool) {
    let id = create_page(&pool, json!({"title": "Печать", "slug": "print"})).await;
    let url = format!("/api/v1/admin/pages/{id}");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &url,
        json!({"title": "Широкоформатная печать", "category": "printing"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = &body_json(response).await["data"];
    assert_eq!(page["title"], "Широкоформатная печать");
    assert_eq!(page["slug"], "print");
    assert_eq!(page["category"], "printing");

    let response = delete(common::build_test_app(pool.clone()), &url).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool.clone()), &url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), &url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_pages_filters_and_searches(pool: PgPool) {
    create_page(
        &pool,
        json!({"title": "Баннеры", "slug": "banners", "category": "outdoor"}),
    )
    .await;
    create_page(
        &pool,
        json!({"title": "Кружки", "slug": "mugs", "category": "souvenirs", "is_published": false}),
    )
    .await;

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/admin/pages?category=outdoor",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["slug"], "banners");

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/admin/pages?is_published=false",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["slug"], "mugs");

    let json = body_json(
        get(common::build_test_app(pool), "/api/v1/admin/pages?search=MUG").await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn section_on_missing_page_returns_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/admin/pages/999999/html-sections",
        json!({"content": "<p>x</p>"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn internal_link_to_missing_page_returns_400(pool: PgPool) {
    let page_id = create_page(&pool, json!({"title": "Главная", "slug": "home"})).await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/admin/pages/{page_id}/text-image-sections"),
        json!({
            "title": "О компании",
            "content": "Текст",
            "image": "sections/office.jpg",
            "internal_link_id": 999999,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn text_image_section_resolves_internal_link_slug(pool: PgPool) {
    let home = create_page(&pool, json!({"title": "Главная", "slug": "home"})).await;
    let about = create_page(&pool, json!({"title": "О нас", "slug": "about"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/pages/{home}/text-image-sections"),
        json!({
            "title": "О компании",
            "content": "Текст",
            "image": "sections/office.jpg",
            "image_position": "left",
            "internal_link_id": about,
            "external_link": "http://x.com",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let section = body_json(response).await["data"].clone();
    assert_eq!(section["internal_link_slug"], "about");
    let id = section["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/text-image-sections/{id}"),
        json!({"clear_internal_link": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let section = &body_json(response).await["data"];
    assert!(section["internal_link_id"].is_null());
    assert!(section["internal_link_slug"].is_null());
    assert_eq!(section["external_link"], "http://x.com");

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/admin/text-image-sections/{id}"),
        json!({"image_position": "top"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slider_with_slides_appears_in_page_content(pool: PgPool) {
    let page_id = create_page(&pool, json!({"title": "Главная", "slug": "home"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/pages/{page_id}/sliders"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let slider = body_json(response).await["data"].clone();
    assert_eq!(slider["autoplay"], true);
    let slider_id = slider["id"].as_i64().unwrap();

    for (title, order) in [("Второй", 1), ("Первый", 0)] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/admin/sliders/{slider_id}/slides"),
            json!({"title": title, "image": "slides/a.jpg", "sort_order": order}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/pages/{page_id}/content"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let content = &body_json(response).await["data"];
    assert_eq!(content["page"]["slug"], "home");
    let slides = content["slider_sections"][0]["slides"].as_array().unwrap();
    assert_eq!(slides[0]["title"], "Первый");
    assert_eq!(slides[1]["title"], "Второй");

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/sliders/{slider_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/admin/sliders/{slider_id}/slides"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn services_cards_and_features_crud(pool: PgPool) {
    let page_id = create_page(&pool, json!({"title": "Услуги", "slug": "services"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/pages/{page_id}/services-sections"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let section = body_json(response).await["data"].clone();
    assert_eq!(section["main_title"], "Наши услуги");
    let section_id = section["id"].as_i64().unwrap();

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/services-sections/{section_id}/cards"),
        json!({"title": "Печать", "description": "Баннеры", "icon": "print", "icon_color": "red"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/services-sections/{section_id}/cards"),
        json!({"title": "Печать", "description": "Баннеры", "icon": "print", "icon_color": "#ff6600"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let card_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/service-cards/{card_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/pages/{page_id}/features-sections"),
        json!({"sort_order": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let section = body_json(response).await["data"].clone();
    assert_eq!(section["main_title"], "Почему выбирают нас");
    let features_id = section["id"].as_i64().unwrap();

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/features-sections/{features_id}/features"),
        json!({"title": "Скорость", "description": "За сутки", "icon": "bolt"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/admin/features-sections/{features_id}/features"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["title"], "Скорость");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_sections_return_404(pool: PgPool) {
    for url in [
        "/api/v1/admin/hero-sections/999999",
        "/api/v1/admin/gallery-images/999999",
        "/api/v1/admin/features/999999",
    ] {
        let response = delete(common::build_test_app(pool.clone()), url).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{url}");
    }

    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/admin/html-sections/999999",
        json!({"content": "<p></p>"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Ad boards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn ad_board_crud_and_validation(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/ad-boards",
        json!({"title": "Дирижабль", "ad_type": "zeppelin", "address": "Небо"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/ad-boards",
        json!({"title": "Щит", "ad_type": "billboard", "address": "ул. Мира, 3", "price": -5.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/ad-boards",
        json!({"title": "Щит", "ad_type": "billboard", "address": "ул. Мира, 3", "price": 99999999.996}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/ad-boards",
        json!({"title": "Щит", "ad_type": "billboard", "address": "ул. Мира, 3", "price": 15000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let board = body_json(response).await["data"].clone();
    assert_eq!(board["price"], 15000.0);
    assert_eq!(board["is_active"], true);
    let id = board["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/ad-boards/{id}"),
        json!({"clear_price": true, "is_active": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let board = &body_json(response).await["data"];
    assert!(board["price"].is_null());
    assert_eq!(board["is_active"], false);

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/admin/ad-boards?is_active=false",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/ad-boards/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/admin/ad-boards/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn site_settings_singleton(pool: PgPool) {
    let url = "/api/v1/admin/site-settings";

    let response = get(common::build_test_app(pool.clone()), url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    put_json(
        common::build_test_app(pool.clone()),
        url,
        json!({"site_name": "Первое имя"}),
    )
    .await;
    let response = put_json(
        common::build_test_app(pool.clone()),
        url,
        json!({"site_name": "Второе имя", "email": "info@example.ru"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let settings = body_json(get(common::build_test_app(pool.clone()), url).await).await;
    assert_eq!(settings["data"]["site_name"], "Второе имя");
    assert_eq!(settings["data"]["email"], "info@example.ru");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM site_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let response = delete(common::build_test_app(pool.clone()), url).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool), url).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
