//! Repositories for `slider_sections` and `slides`.

use adsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::slider::{
    CreateSlide, CreateSliderSection, Slide, SliderSection, UpdateSlide, UpdateSliderSection,
};
use crate::repositories::section_repo::{delete_from, row_exists};

const SLIDER_COLUMNS: &str =
    "id, page_id, autoplay, autoplay_interval, show_controls, show_indicators, sort_order";

const SLIDE_COLUMNS: &str = "s.id, s.slider_id, s.title, s.subtitle, s.image, s.button_text, \
                             s.internal_link_id, p.slug AS internal_link_slug, s.external_link, \
                             s.background_color, s.sort_order";

pub struct SliderSectionRepo;

impl SliderSectionRepo {
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &CreateSliderSection,
    ) -> Result<SliderSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO slider_sections (page_id, autoplay, autoplay_interval, show_controls, \
                                          show_indicators, sort_order)
             VALUES ($1, COALESCE($2, TRUE), COALESCE($3, 5000), COALESCE($4, TRUE),
                     COALESCE($5, TRUE), COALESCE($6, 0))
             RETURNING {SLIDER_COLUMNS}"
        );
        sqlx::query_as::<_, SliderSection>(&query)
            .bind(page_id)
            .bind(input.autoplay)
            .bind(input.autoplay_interval)
            .bind(input.show_controls)
            .bind(input.show_indicators)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "slider_sections", id).await
    }

    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<SliderSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SLIDER_COLUMNS} FROM slider_sections
             WHERE page_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, SliderSection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSliderSection,
    ) -> Result<Option<SliderSection>, sqlx::Error> {
        let query = format!(
            "UPDATE slider_sections SET
                autoplay = COALESCE($2, autoplay),
                autoplay_interval = COALESCE($3, autoplay_interval),
                show_controls = COALESCE($4, show_controls),
                show_indicators = COALESCE($5, show_indicators),
                sort_order = COALESCE($6, sort_order)
             WHERE id = $1
             RETURNING {SLIDER_COLUMNS}"
        );
        sqlx::query_as::<_, SliderSection>(&query)
            .bind(id)
            .bind(input.autoplay)
            .bind(input.autoplay_interval)
            .bind(input.show_controls)
            .bind(input.show_indicators)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slider together with its slides.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "slider_sections", id).await
    }
}

pub struct SlideRepo;

impl SlideRepo {
    pub async fn create(
        pool: &PgPool,
        slider_id: DbId,
        input: &CreateSlide,
    ) -> Result<Slide, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                INSERT INTO slides (slider_id, title, subtitle, image, button_text,
                                    internal_link_id, external_link, background_color, sort_order)
                VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, COALESCE($5, ''), $6,
                        COALESCE($7, ''), COALESCE($8, 'from-blue-800 to-blue-600'),
                        COALESCE($9, 0))
                RETURNING *
             )
             SELECT {SLIDE_COLUMNS} FROM s
             LEFT JOIN pages p ON p.id = s.internal_link_id"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(slider_id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(&input.external_link)
            .bind(&input.background_color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Slides of one slider in display order.
    pub async fn list_for_slider(
        pool: &PgPool,
        slider_id: DbId,
    ) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {SLIDE_COLUMNS} FROM slides s
             LEFT JOIN pages p ON p.id = s.internal_link_id
             WHERE s.slider_id = $1
             ORDER BY s.sort_order, s.id"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(slider_id)
            .fetch_all(pool)
            .await
    }

    /// Slides of every slider on a page, for grouping in one round trip.
    pub async fn list_for_page(pool: &PgPool, page_id: DbId) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {SLIDE_COLUMNS} FROM slides s
             JOIN slider_sections ss ON ss.id = s.slider_id
             LEFT JOIN pages p ON p.id = s.internal_link_id
             WHERE ss.page_id = $1
             ORDER BY s.sort_order, s.id"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSlide,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                UPDATE slides SET
                    title = COALESCE($2, title),
                    subtitle = COALESCE($3, subtitle),
                    image = COALESCE($4, image),
                    button_text = COALESCE($5, button_text),
                    internal_link_id = CASE WHEN $7 THEN NULL
                                            ELSE COALESCE($6, internal_link_id) END,
                    external_link = COALESCE($8, external_link),
                    background_color = COALESCE($9, background_color),
                    sort_order = COALESCE($10, sort_order)
                WHERE id = $1
                RETURNING *
             )
             SELECT {SLIDE_COLUMNS} FROM s
             LEFT JOIN pages p ON p.id = s.internal_link_id"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(input.clear_internal_link)
            .bind(&input.external_link)
            .bind(&input.background_color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "slides", id).await
    }
}
