//! Repositories for `features_sections` and `features`.

use adsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::features::{
    CreateFeature, Feature, FeaturesSection, SaveFeaturesSection, UpdateFeature,
};
use crate::repositories::section_repo::{delete_from, row_exists};

const SECTION_COLUMNS: &str = "id, page_id, main_title, sort_order";

const FEATURE_COLUMNS: &str = "f.id, f.section_id, f.title, f.description, f.icon, f.icon_color, \
                               f.sort_order";

pub struct FeaturesSectionRepo;

impl FeaturesSectionRepo {
    /// Insert a features section; the heading defaults to "Почему выбирают нас".
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &SaveFeaturesSection,
    ) -> Result<FeaturesSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO features_sections (page_id, main_title, sort_order)
             VALUES ($1, COALESCE($2, 'Почему выбирают нас'), COALESCE($3, 0))
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, FeaturesSection>(&query)
            .bind(page_id)
            .bind(&input.main_title)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "features_sections", id).await
    }

    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<FeaturesSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM features_sections
             WHERE page_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, FeaturesSection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveFeaturesSection,
    ) -> Result<Option<FeaturesSection>, sqlx::Error> {
        let query = format!(
            "UPDATE features_sections SET
                main_title = COALESCE($2, main_title),
                sort_order = COALESCE($3, sort_order)
             WHERE id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, FeaturesSection>(&query)
            .bind(id)
            .bind(&input.main_title)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "features_sections", id).await
    }
}

pub struct FeatureRepo;

impl FeatureRepo {
    pub async fn create(
        pool: &PgPool,
        section_id: DbId,
        input: &CreateFeature,
    ) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features AS f (section_id, title, description, icon, icon_color, \
                                        sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, '#3B82F6'), COALESCE($6, 0))
             RETURNING {FEATURE_COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(section_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.icon_color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!(
            "SELECT {FEATURE_COLUMNS} FROM features f
             WHERE f.section_id = $1
             ORDER BY f.sort_order, f.id"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Features of every features section on a page.
    pub async fn list_for_page(pool: &PgPool, page_id: DbId) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!(
            "SELECT {FEATURE_COLUMNS} FROM features f
             JOIN features_sections fs ON fs.id = f.section_id
             WHERE fs.page_id = $1
             ORDER BY f.sort_order, f.id"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeature,
    ) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!(
            "UPDATE features AS f SET
                title = COALESCE($2, f.title),
                description = COALESCE($3, f.description),
                icon = COALESCE($4, f.icon),
                icon_color = COALESCE($5, f.icon_color),
                sort_order = COALESCE($6, f.sort_order)
             WHERE f.id = $1
             RETURNING {FEATURE_COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.icon_color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "features", id).await
    }
}
