//! Repositories for the single-row section tables.
//!
//! Sections that link to another page select the target's slug through a
//! `LEFT JOIN pages`; writes go through a CTE so the returned row carries the
//! slug as well.

use adsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::sections::{
    CreateHeroSection, CreateHtmlSection, CreateTextHtmlSection, CreateTextImageSection,
    HeroSection, HtmlSection, TextHtmlSection, TextImageSection, UpdateHeroSection,
    UpdateHtmlSection, UpdateTextHtmlSection, UpdateTextImageSection,
};

/// Delete one row by id from a section table.
pub(crate) async fn delete_from(pool: &PgPool, table: &str, id: DbId) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {table} WHERE id = $1");
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Whether a row with `id` exists in `table`.
pub(crate) async fn row_exists(pool: &PgPool, table: &str, id: DbId) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1)");
    sqlx::query_scalar::<_, bool>(&query)
        .bind(id)
        .fetch_one(pool)
        .await
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// `gradient_opacity` is `NUMERIC(3, 2)` and read back as `f64`.
const HERO_COLUMNS: &str = "id, page_id, title, subtitle, background_image, background_gradient, \
                            gradient_opacity::DOUBLE PRECISION AS gradient_opacity, text_color, \
                            sort_order";

pub struct HeroSectionRepo;

impl HeroSectionRepo {
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &CreateHeroSection,
    ) -> Result<HeroSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_sections (page_id, title, subtitle, background_image, \
                                        background_gradient, gradient_opacity, text_color, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'from-orange-800 to-orange-600'),
                     COALESCE($6::DOUBLE PRECISION, 1.0), COALESCE($7, '#ffffff'), COALESCE($8, 0))
             RETURNING {HERO_COLUMNS}"
        );
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(page_id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.background_image)
            .bind(&input.background_gradient)
            .bind(input.gradient_opacity)
            .bind(&input.text_color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// All hero sections of a page in display order.
    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<HeroSection>, sqlx::Error> {
        let query = format!(
            "SELECT {HERO_COLUMNS} FROM hero_sections
             WHERE page_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    /// Update a hero section. `clear_background_image` unsets the image.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSection,
    ) -> Result<Option<HeroSection>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_sections SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                background_image = CASE WHEN $5 THEN NULL
                                        ELSE COALESCE($4, background_image) END,
                background_gradient = COALESCE($6, background_gradient),
                gradient_opacity = COALESCE($7::DOUBLE PRECISION,
                                            gradient_opacity::DOUBLE PRECISION),
                text_color = COALESCE($8, text_color),
                sort_order = COALESCE($9, sort_order)
             WHERE id = $1
             RETURNING {HERO_COLUMNS}"
        );
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.background_image)
            .bind(input.clear_background_image)
            .bind(&input.background_gradient)
            .bind(input.gradient_opacity)
            .bind(&input.text_color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "hero_sections", id).await
    }
}

// ---------------------------------------------------------------------------
// Text + image
// ---------------------------------------------------------------------------

const TEXT_IMAGE_COLUMNS: &str = "s.id, s.page_id, s.title, s.content, s.image, s.image_position, \
                                  s.button_text, s.internal_link_id, \
                                  p.slug AS internal_link_slug, s.external_link, s.sort_order";

pub struct TextImageSectionRepo;

impl TextImageSectionRepo {
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &CreateTextImageSection,
    ) -> Result<TextImageSection, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                INSERT INTO text_image_sections (page_id, title, content, image, image_position,
                                                 button_text, internal_link_id, external_link,
                                                 sort_order)
                VALUES ($1, $2, $3, $4, COALESCE($5, 'right'), COALESCE($6, ''), $7,
                        COALESCE($8, ''), COALESCE($9, 0))
                RETURNING *
             )
             SELECT {TEXT_IMAGE_COLUMNS} FROM s
             LEFT JOIN pages p ON p.id = s.internal_link_id"
        );
        sqlx::query_as::<_, TextImageSection>(&query)
            .bind(page_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image)
            .bind(&input.image_position)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(&input.external_link)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<TextImageSection>, sqlx::Error> {
        let query = format!(
            "SELECT {TEXT_IMAGE_COLUMNS} FROM text_image_sections s
             LEFT JOIN pages p ON p.id = s.internal_link_id
             WHERE s.page_id = $1
             ORDER BY s.sort_order, s.id"
        );
        sqlx::query_as::<_, TextImageSection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTextImageSection,
    ) -> Result<Option<TextImageSection>, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                UPDATE text_image_sections SET
                    title = COALESCE($2, title),
                    content = COALESCE($3, content),
                    image = COALESCE($4, image),
                    image_position = COALESCE($5, image_position),
                    button_text = COALESCE($6, button_text),
                    internal_link_id = CASE WHEN $8 THEN NULL
                                            ELSE COALESCE($7, internal_link_id) END,
                    external_link = COALESCE($9, external_link),
                    sort_order = COALESCE($10, sort_order)
                WHERE id = $1
                RETURNING *
             )
             SELECT {TEXT_IMAGE_COLUMNS} FROM s
             LEFT JOIN pages p ON p.id = s.internal_link_id"
        );
        sqlx::query_as::<_, TextImageSection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image)
            .bind(&input.image_position)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(input.clear_internal_link)
            .bind(&input.external_link)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "text_image_sections", id).await
    }
}

// ---------------------------------------------------------------------------
// Text + HTML
// ---------------------------------------------------------------------------

const TEXT_HTML_COLUMNS: &str = "s.id, s.page_id, s.title, s.content, s.html_content, \
                                 s.html_position, s.button_text, s.internal_link_id, \
                                 p.slug AS internal_link_slug, s.external_link, s.sort_order";

pub struct TextHtmlSectionRepo;

impl TextHtmlSectionRepo {
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &CreateTextHtmlSection,
    ) -> Result<TextHtmlSection, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                INSERT INTO text_html_sections (page_id, title, content, html_content,
                                                html_position, button_text, internal_link_id,
                                                external_link, sort_order)
                VALUES ($1, $2, $3, $4, COALESCE($5, 'right'), COALESCE($6, ''), $7,
                        COALESCE($8, ''), COALESCE($9, 0))
                RETURNING *
             )
             SELECT {TEXT_HTML_COLUMNS} FROM s
             LEFT JOIN pages p ON p.id = s.internal_link_id"
        );
        sqlx::query_as::<_, TextHtmlSection>(&query)
            .bind(page_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.html_content)
            .bind(&input.html_position)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(&input.external_link)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<TextHtmlSection>, sqlx::Error> {
        let query = format!(
            "SELECT {TEXT_HTML_COLUMNS} FROM text_html_sections s
             LEFT JOIN pages p ON p.id = s.internal_link_id
             WHERE s.page_id = $1
             ORDER BY s.sort_order, s.id"
        );
        sqlx::query_as::<_, TextHtmlSection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTextHtmlSection,
    ) -> Result<Option<TextHtmlSection>, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                UPDATE text_html_sections SET
                    title = COALESCE($2, title),
                    content = COALESCE($3, content),
                    html_content = COALESCE($4, html_content),
                    html_position = COALESCE($5, html_position),
                    button_text = COALESCE($6, button_text),
                    internal_link_id = CASE WHEN $8 THEN NULL
                                            ELSE COALESCE($7, internal_link_id) END,
                    external_link = COALESCE($9, external_link),
                    sort_order = COALESCE($10, sort_order)
                WHERE id = $1
                RETURNING *
             )
             SELECT {TEXT_HTML_COLUMNS} FROM s
             LEFT JOIN pages p ON p.id = s.internal_link_id"
        );
        sqlx::query_as::<_, TextHtmlSection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.html_content)
            .bind(&input.html_position)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(input.clear_internal_link)
            .bind(&input.external_link)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "text_html_sections", id).await
    }
}

// ---------------------------------------------------------------------------
// Raw HTML
// ---------------------------------------------------------------------------

const HTML_COLUMNS: &str = "id, page_id, content, sort_order";

pub struct HtmlSectionRepo;

impl HtmlSectionRepo {
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &CreateHtmlSection,
    ) -> Result<HtmlSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO html_sections (page_id, content, sort_order)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {HTML_COLUMNS}"
        );
        sqlx::query_as::<_, HtmlSection>(&query)
            .bind(page_id)
            .bind(&input.content)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<HtmlSection>, sqlx::Error> {
        let query = format!(
            "SELECT {HTML_COLUMNS} FROM html_sections
             WHERE page_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, HtmlSection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHtmlSection,
    ) -> Result<Option<HtmlSection>, sqlx::Error> {
        let query = format!(
            "UPDATE html_sections SET
                content = COALESCE($2, content),
                sort_order = COALESCE($3, sort_order)
             WHERE id = $1
             RETURNING {HTML_COLUMNS}"
        );
        sqlx::query_as::<_, HtmlSection>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "html_sections", id).await
    }
}
