//! Repositories for `gallery_sections` and `gallery_images`.

use adsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{
    CreateGalleryImage, CreateGallerySection, GalleryImage, GallerySection, UpdateGalleryImage,
    UpdateGallerySection,
};
use crate::repositories::section_repo::{delete_from, row_exists};

const SECTION_COLUMNS: &str = "id, page_id, title, sort_order";

const IMAGE_COLUMNS: &str = "i.id, i.section_id, i.image, i.title, i.description, i.sort_order";

pub struct GallerySectionRepo;

impl GallerySectionRepo {
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &CreateGallerySection,
    ) -> Result<GallerySection, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_sections (page_id, title, sort_order)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, GallerySection>(&query)
            .bind(page_id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        row_exists(pool, "gallery_sections", id).await
    }

    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<GallerySection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM gallery_sections
             WHERE page_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, GallerySection>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGallerySection,
    ) -> Result<Option<GallerySection>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_sections SET
                title = COALESCE($2, title),
                sort_order = COALESCE($3, sort_order)
             WHERE id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, GallerySection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "gallery_sections", id).await
    }
}

pub struct GalleryImageRepo;

impl GalleryImageRepo {
    pub async fn create(
        pool: &PgPool,
        section_id: DbId,
        input: &CreateGalleryImage,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_images AS i (section_id, image, title, description, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, 0))
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(section_id)
            .bind(&input.image)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM gallery_images i
             WHERE i.section_id = $1
             ORDER BY i.sort_order, i.id"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Images of every gallery on a page.
    pub async fn list_for_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM gallery_images i
             JOIN gallery_sections gs ON gs.id = i.section_id
             WHERE gs.page_id = $1
             ORDER BY i.sort_order, i.id"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryImage,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_images AS i SET
                image = COALESCE($2, i.image),
                title = COALESCE($3, i.title),
                description = COALESCE($4, i.description),
                sort_order = COALESCE($5, i.sort_order)
             WHERE i.id = $1
             RETURNING {IMAGE_COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_from(pool, "gallery_images", id).await
    }
}
