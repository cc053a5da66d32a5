//! Integration tests for the repository layer against a real database:
//! - Page CRUD, slug uniqueness and cascade delete
//! - Section link resolution and `ON DELETE SET NULL`
//! - Page content loading in display order
//! - Site settings singleton upsert
//! - Ad board listing and nullable price

use adsite_core::links::Linkable;
use adsite_core::menu::build_menu;
use adsite_core::page::PageCategory;
use adsite_db::models::ad_board::{AdBoardFilter, CreateAdBoard, UpdateAdBoard};
use adsite_db::models::gallery::{CreateGalleryImage, CreateGallerySection};
use adsite_db::models::page::{CreatePage, PageFilter, UpdatePage};
use adsite_db::models::page_content::ContentBlock;
use adsite_db::models::sections::{CreateHtmlSection, CreateTextImageSection};
use adsite_db::models::site_settings::SaveSiteSettings;
use adsite_db::models::slider::{CreateSlide, CreateSliderSection};
use adsite_db::repositories::{
    AdBoardRepo, GalleryImageRepo, GallerySectionRepo, HtmlSectionRepo, PageRepo,
    SiteSettingsRepo, SlideRepo, SliderSectionRepo, TextImageSectionRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_page(title: &str, slug: &str) -> CreatePage {
    CreatePage {
        title: title.to_string(),
        slug: slug.to_string(),
        meta_description: None,
        category: None,
        is_published: None,
        show_in_menu: None,
        menu_order: None,
    }
}

fn menu_page(title: &str, slug: &str, category: &str, menu_order: i32) -> CreatePage {
    CreatePage {
        category: Some(category.to_string()),
        show_in_menu: Some(true),
        menu_order: Some(menu_order),
        ..new_page(title, slug)
    }
}

fn new_text_image(title: &str, sort_order: i32) -> CreateTextImageSection {
    CreateTextImageSection {
        title: title.to_string(),
        content: "Текст".to_string(),
        image: "sections/a.jpg".to_string(),
        image_position: None,
        button_text: Some("Подробнее".to_string()),
        internal_link_id: None,
        external_link: None,
        sort_order: Some(sort_order),
    }
}

fn new_board(title: &str, ad_type: &str, price: Option<f64>, is_active: bool) -> CreateAdBoard {
    CreateAdBoard {
        title: title.to_string(),
        ad_type: ad_type.to_string(),
        address: "ул. Ленина, 1".to_string(),
        description: None,
        rental_terms: None,
        price,
        contact_info: None,
        photo: None,
        lat: None,
        lon: None,
        is_active: Some(is_active),
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_defaults_and_update(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("Услуги", "services"))
        .await
        .unwrap();
    assert_eq!(page.category, "other");
    assert!(page.is_published);
    assert!(!page.show_in_menu);
    assert_eq!(page.menu_order, 0);
    assert_eq!(page.url(), "/services/");

    let update = UpdatePage {
        title: Some("Наши услуги".to_string()),
        slug: None,
        meta_description: None,
        category: Some("outdoor".to_string()),
        is_published: Some(false),
        show_in_menu: None,
        menu_order: None,
    };
    let updated = PageRepo::update(&pool, page.id, &update)
        .await
        .unwrap()
        .expect("page exists");
    assert_eq!(updated.title, "Наши услуги");
    assert_eq!(updated.slug, "services");
    assert_eq!(updated.category, "outdoor");
    assert!(updated.updated_at >= page.updated_at);

    // Unpublished pages are invisible to the public lookup.
    let found = PageRepo::find_published_by_slug(&pool, "services")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_slug_violates_unique_constraint(pool: PgPool) {
    PageRepo::create(&pool, &new_page("A", "about")).await.unwrap();
    let err = PageRepo::create(&pool, &new_page("B", "about"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_pages_slug"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_filter_and_search(pool: PgPool) {
    PageRepo::create(&pool, &menu_page("Баннеры", "banners", "outdoor", 1))
        .await
        .unwrap();
    PageRepo::create(&pool, &menu_page("Вывески", "signs", "interior", 0))
        .await
        .unwrap();

    let outdoor = PageRepo::list(
        &pool,
        &PageFilter {
            category: Some("outdoor".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(outdoor.len(), 1);
    assert_eq!(outdoor[0].slug, "banners");

    let found = PageRepo::list(
        &pool,
        &PageFilter {
            search: Some("ВЫВЕС".to_string()),
            show_in_menu: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "signs");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_menu_candidates_feed_menu_projection(pool: PgPool) {
    PageRepo::create(&pool, &menu_page("B", "b", "outdoor", 2)).await.unwrap();
    PageRepo::create(&pool, &menu_page("A", "a", "outdoor", 1)).await.unwrap();
    PageRepo::create(&pool, &menu_page("Z", "z", "outdoor", 1)).await.unwrap();
    PageRepo::create(&pool, &menu_page("Главная", "home", "main", 0)).await.unwrap();
    PageRepo::create(&pool, &new_page("Скрытая", "hidden")).await.unwrap();

    let menu = build_menu(PageRepo::list_menu_candidates(&pool).await.unwrap());

    assert_eq!(menu.len(), 1);
    let titles: Vec<_> = menu[&PageCategory::Outdoor]
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "Z", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_page_cascades_sections(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("Галерея", "gallery")).await.unwrap();
    let gallery = GallerySectionRepo::create(
        &pool,
        page.id,
        &CreateGallerySection {
            title: "Работы".to_string(),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    GalleryImageRepo::create(
        &pool,
        gallery.id,
        &CreateGalleryImage {
            image: "gallery/1.jpg".to_string(),
            title: None,
            description: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();

    assert!(PageRepo::delete(&pool, page.id).await.unwrap());
    assert!(!PageRepo::delete(&pool, page.id).await.unwrap());

    let images: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM gallery_images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(images.0, 0);
    assert!(!GallerySectionRepo::exists(&pool, gallery.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Sections and links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_internal_link_resolves_and_clears_on_target_delete(pool: PgPool) {
    let home = PageRepo::create(&pool, &new_page("Главная", "home")).await.unwrap();
    let about = PageRepo::create(&pool, &new_page("О нас", "about")).await.unwrap();

    let mut input = new_text_image("Кто мы", 0);
    input.internal_link_id = Some(about.id);
    input.external_link = Some("http://x.com".to_string());
    let section = TextImageSectionRepo::create(&pool, home.id, &input)
        .await
        .unwrap();
    assert_eq!(section.internal_link_slug.as_deref(), Some("about"));
    assert_eq!(section.link(), "/about/");

    PageRepo::delete(&pool, about.id).await.unwrap();

    let sections = TextImageSectionRepo::list_for_page(&pool, home.id)
        .await
        .unwrap();
    assert_eq!(sections[0].internal_link_id, None);
    assert_eq!(sections[0].link(), "http://x.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_load_content_orders_sections_and_children(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("Главная", "home")).await.unwrap();

    TextImageSectionRepo::create(&pool, page.id, &new_text_image("Второй", 2))
        .await
        .unwrap();
    TextImageSectionRepo::create(&pool, page.id, &new_text_image("Первый", 1))
        .await
        .unwrap();
    HtmlSectionRepo::create(
        &pool,
        page.id,
        &CreateHtmlSection {
            content: "<hr>".to_string(),
            sort_order: Some(0),
        },
    )
    .await
    .unwrap();

    let slider = SliderSectionRepo::create(&pool, page.id, &CreateSliderSection::default())
        .await
        .unwrap();
    assert_eq!(slider.autoplay_interval, 5000);
    for (title, order) in [("b", 1), ("a", 0), ("c", 1)] {
        SlideRepo::create(
            &pool,
            slider.id,
            &CreateSlide {
                title: Some(title.to_string()),
                subtitle: None,
                image: format!("slides/{title}.jpg"),
                button_text: None,
                internal_link_id: None,
                external_link: None,
                background_color: None,
                sort_order: Some(order),
            },
        )
        .await
        .unwrap();
    }

    let content = PageRepo::load_content(&pool, page).await.unwrap();

    let titles: Vec<_> = content
        .text_image_sections
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Первый", "Второй"]);

    let slides: Vec<_> = content.slider_sections[0]
        .slides
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(slides, vec!["a", "b", "c"]);
    assert_eq!(content.slider_sections[0].slides[1].background_color, "from-blue-800 to-blue-600");

    // sort_order 0: html (type rank 4) is preceded by the slider (rank 1).
    let blocks = content.blocks();
    assert!(matches!(blocks[0], ContentBlock::Slider(_)));
    assert!(matches!(blocks[1], ContentBlock::Html(_)));
    assert_eq!(blocks.len(), 4);
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_settings_save_twice_keeps_one_row(pool: PgPool) {
    assert!(SiteSettingsRepo::get(&pool).await.unwrap().is_none());

    let first = SaveSiteSettings {
        site_name: "Первое".to_string(),
        ..Default::default()
    };
    SiteSettingsRepo::save(&pool, &first).await.unwrap();

    let second = SaveSiteSettings {
        site_name: "Второе".to_string(),
        phone: "+7 000".to_string(),
        ..Default::default()
    };
    SiteSettingsRepo::save(&pool, &second).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM site_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);

    let settings = SiteSettingsRepo::get(&pool).await.unwrap().unwrap();
    assert_eq!(settings.site_name, "Второе");
    assert_eq!(settings.phone, "+7 000");

    assert!(SiteSettingsRepo::delete(&pool).await.unwrap());
    assert!(SiteSettingsRepo::get(&pool).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Ad boards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ad_board_price_and_active_listing(pool: PgPool) {
    let free = AdBoardRepo::create(&pool, &new_board("Щит", "billboard", None, true))
        .await
        .unwrap();
    assert_eq!(free.price, None);
    assert_eq!(free.lat, 52.9994);
    assert_eq!(free.lon, 78.6459);

    AdBoardRepo::create(&pool, &new_board("Экран", "led_screen", Some(10.5), false))
        .await
        .unwrap();
    let priced = AdBoardRepo::create(&pool, &new_board("Афиша", "billboard", Some(15000.0), true))
        .await
        .unwrap();
    assert_eq!(priced.price, Some(15000.0));

    let active = AdBoardRepo::list_active(&pool).await.unwrap();
    let titles: Vec<_> = active.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Афиша", "Щит"]);

    let cleared = AdBoardRepo::update(
        &pool,
        priced.id,
        &UpdateAdBoard {
            clear_price: true,
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(cleared.price, None);

    let led = AdBoardRepo::list(
        &pool,
        &AdBoardFilter {
            ad_type: Some("led_screen".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(led.len(), 1);
    assert!(!led[0].is_active);
}
