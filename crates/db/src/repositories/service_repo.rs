//! Repositories for `services_sections` and `service_cards`.

use adsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::services::{
    CreateServiceCard, SaveServicesSection, ServiceCard, ServicesSection, UpdateServiceCard,
};
use crate::repositories::section_repo::{delete_from, row_exists};

const SECTION_COLUMNS: &str = "id, page_id, main_title, sort_order";

const CARD_COLUMNS: &str = "c.id, c.section_id, c.title, c.description, c.icon, c.icon_color, \
                            c.button_text, c.internal_link_id, p.slug AS internal_link_slug, \
                            c.external_link, c.sort_order";

pub struct ServicesSectionRepo;

impl ServicesSectionRepo {
    /// Insert a services section; the heading defaults to "Наши услуги".
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &SaveServicesSection,
    ) -> Result<ServicesSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO services_sections (page_id, main_title, sort_order)
             VALUES ($1, COALESCE($2, 'Наши услуги'), COALESCE($3, 0))
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, ServicesSection>(&query)
            .bind(page_id)
            .bind(&input.main_title)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "services_sections", id).await
    }

    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<ServicesSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM services_sections
             WHERE page_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, ServicesSection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveServicesSection,
    ) -> Result<Option<ServicesSection>, sqlx::Error> {
        let query = format!(
            "UPDATE services_sections SET
                main_title = COALESCE($2, main_title),
                sort_order = COALESCE($3, sort_order)
             WHERE id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, ServicesSection>(&query)
            .bind(id)
            .bind(&input.main_title)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "services_sections", id).await
    }
}

pub struct ServiceCardRepo;

impl ServiceCardRepo {
    pub async fn create(
        pool: &PgPool,
        section_id: DbId,
        input: &CreateServiceCard,
    ) -> Result<ServiceCard, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                INSERT INTO service_cards (section_id, title, description, icon, icon_color,
                                           button_text, internal_link_id, external_link,
                                           sort_order)
                VALUES ($1, $2, $3, $4, COALESCE($5, '#3B82F6'), COALESCE($6, ''), $7,
                        COALESCE($8, ''), COALESCE($9, 0))
                RETURNING *
             )
             SELECT {CARD_COLUMNS} FROM c
             LEFT JOIN pages p ON p.id = c.internal_link_id"
        );
        sqlx::query_as::<_, ServiceCard>(&query)
            .bind(section_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.icon_color)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(&input.external_link)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<ServiceCard>, sqlx::Error> {
        let query = format!(
            "SELECT {CARD_COLUMNS} FROM service_cards c
             LEFT JOIN pages p ON p.id = c.internal_link_id
             WHERE c.section_id = $1
             ORDER BY c.sort_order, c.id"
        );
        sqlx::query_as::<_, ServiceCard>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Cards of every services section on a page.
    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<ServiceCard>, sqlx::Error> {
        let query = format!(
            "SELECT {CARD_COLUMNS} FROM service_cards c
             JOIN services_sections ss ON ss.id = c.section_id
             LEFT JOIN pages p ON p.id = c.internal_link_id
             WHERE ss.page_id = $1
             ORDER BY c.sort_order, c.id"
        );
        sqlx::query_as::<_, ServiceCard>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceCard,
    ) -> Result<Option<ServiceCard>, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                UPDATE service_cards SET
                    title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    icon = COALESCE($4, icon),
                    icon_color = COALESCE($5, icon_color),
                    button_text = COALESCE($6, button_text),
                    internal_link_id = CASE WHEN $8 THEN NULL
                                            ELSE COALESCE($7, internal_link_id) END,
                    external_link = COALESCE($9, external_link),
                    sort_order = COALESCE($10, sort_order)
                WHERE id = $1
                RETURNING *
             )
             SELECT {CARD_COLUMNS} FROM c
             LEFT JOIN pages p ON p.id = c.internal_link_id"
        );
        sqlx::query_as::<_, ServiceCard>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.icon_color)
            .bind(&input.button_text)
            .bind(input.internal_link_id)
            .bind(input.clear_internal_link)
            .bind(&input.external_link)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "service_cards", id).await
    }
}
