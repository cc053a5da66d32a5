//! Repository for the `pages` table.

use adsite_core::sections::sort_for_display;
use adsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{CreatePage, Page, PageFilter, UpdatePage};
use crate::models::page_content::{
    group_children, FeaturesWithItems, GalleryWithImages, PageContent, ServicesWithCards,
    SliderWithSlides,
};
use crate::repositories::{
    FeatureRepo, FeaturesSectionRepo, GalleryImageRepo, GallerySectionRepo, HeroSectionRepo,
    HtmlSectionRepo, ServiceCardRepo, ServicesSectionRepo, SlideRepo, SliderSectionRepo,
    TextHtmlSectionRepo, TextImageSectionRepo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, meta_description, category, is_published, \
                       show_in_menu, menu_order, created_at, updated_at";

/// Provides CRUD operations for pages plus the public lookups.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page, returning the created row.
    ///
    /// Omitted fields take the column defaults: empty meta description,
    /// category `other`, published, hidden from the menu, order 0.
    pub async fn create(pool: &PgPool, input: &CreatePage) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (title, slug, meta_description, category, is_published, \
                                show_in_menu, menu_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'other'), COALESCE($5, TRUE),
                     COALESCE($6, FALSE), COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.meta_description)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(input.show_in_menu)
            .bind(input.menu_order)
            .fetch_one(pool)
            .await
    }

    /// Find a page by ID regardless of its published flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the published page with the given slug.
    ///
    /// Unpublished pages are invisible here, exactly as if they did not exist.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1 AND is_published");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List pages for the admin, ordered by `(menu_order, title)`.
    pub async fn list(pool: &PgPool, filter: &PageFilter) -> Result<Vec<Page>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.is_published.is_some() {
            conditions.push(format!("is_published = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.show_in_menu.is_some() {
            conditions.push(format!("show_in_menu = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR slug ILIKE ${bind_idx} \
                 OR meta_description ILIKE ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM pages {where_clause} ORDER BY menu_order, title, id"
        );
        let mut q = sqlx::query_as::<_, Page>(&query);
        if let Some(category) = &filter.category {
            q = q.bind(category);
        }
        if let Some(is_published) = filter.is_published {
            q = q.bind(is_published);
        }
        if let Some(show_in_menu) = filter.show_in_menu {
            q = q.bind(show_in_menu);
        }
        if let Some(search) = &filter.search {
            q = q.bind(format!("%{search}%"));
        }
        q.fetch_all(pool).await
    }

    /// Pages that may appear in the navigation menu.
    ///
    /// Narrowed by the published/menu flags in SQL; the category exclusion
    /// and grouping happen in `adsite_core::menu::build_menu`.
    pub async fn list_menu_candidates(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE is_published AND show_in_menu
             ORDER BY menu_order, title, id"
        );
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// Update a page. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                meta_description = COALESCE($4, meta_description),
                category = COALESCE($5, category),
                is_published = COALESCE($6, is_published),
                show_in_menu = COALESCE($7, show_in_menu),
                menu_order = COALESCE($8, menu_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.meta_description)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(input.show_in_menu)
            .bind(input.menu_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a page and, by cascade, all of its sections.
    ///
    /// Links from other pages' sections to this page are cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load every section of `page`, children included, in display order.
    ///
    /// The per-table queries are independent and run concurrently.
    pub async fn load_content(pool: &PgPool, page: Page) -> Result<PageContent, sqlx::Error> {
        let page_id = page.id;
        let (
            mut hero_sections,
            mut text_image_sections,
            mut text_html_sections,
            mut html_sections,
            mut sliders,
            mut slides,
            mut services,
            mut cards,
            mut features_sections,
            mut features,
            mut galleries,
            mut images,
        ) = tokio::try_join!(
            HeroSectionRepo::list_for_page(pool, page_id),
            TextImageSectionRepo::list_for_page(pool, page_id),
            TextHtmlSectionRepo::list_for_page(pool, page_id),
            HtmlSectionRepo::list_for_page(pool, page_id),
            SliderSectionRepo::list_for_page(pool, page_id),
            SlideRepo::list_for_page(pool, page_id),
            ServicesSectionRepo::list_for_page(pool, page_id),
            ServiceCardRepo::list_for_page(pool, page_id),
            FeaturesSectionRepo::list_for_page(pool, page_id),
            FeatureRepo::list_for_page(pool, page_id),
            GallerySectionRepo::list_for_page(pool, page_id),
            GalleryImageRepo::list_for_page(pool, page_id),
        )?;

        // Display order must not depend on the SQL ORDER BY alone.
        sort_for_display(&mut hero_sections);
        sort_for_display(&mut text_image_sections);
        sort_for_display(&mut text_html_sections);
        sort_for_display(&mut html_sections);
        sort_for_display(&mut sliders);
        sort_for_display(&mut slides);
        sort_for_display(&mut services);
        sort_for_display(&mut cards);
        sort_for_display(&mut features_sections);
        sort_for_display(&mut features);
        sort_for_display(&mut galleries);
        sort_for_display(&mut images);

        Ok(PageContent {
            page,
            hero_sections,
            slider_sections: group_children(sliders, slides, |s| s.slider_id, |section, slides| {
                SliderWithSlides { section, slides }
            }),
            text_image_sections,
            text_html_sections,
            html_sections,
            services_sections: group_children(services, cards, |c| c.section_id, |section, cards| {
                ServicesWithCards { section, cards }
            }),
            features_sections: group_children(
                features_sections,
                features,
                |f| f.section_id,
                |section, features| FeaturesWithItems { section, features },
            ),
            gallery_sections: group_children(galleries, images, |i| i.section_id, |section, images| {
                GalleryWithImages { section, images }
            }),
        })
    }
}
