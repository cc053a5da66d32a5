//! Repository for the `ad_boards` table.

use adsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::ad_board::{AdBoard, AdBoardFilter, CreateAdBoard, UpdateAdBoard};

/// Column list shared across queries. `price` is `NUMERIC(10, 2)` and is
/// read back as `f64`.
const COLUMNS: &str = "id, title, ad_type, address, description, rental_terms, \
                       price::DOUBLE PRECISION AS price, contact_info, photo, lat, lon, \
                       is_active, created_at, updated_at";

/// Provides CRUD operations for ad boards plus the active listing for the map.
pub struct AdBoardRepo;

impl AdBoardRepo {
    /// Insert a new board, returning the created row.
    ///
    /// Coordinates default to the town centre and the board is active unless
    /// stated otherwise.
    pub async fn create(pool: &PgPool, input: &CreateAdBoard) -> Result<AdBoard, sqlx::Error> {
        let query = format!(
            "INSERT INTO ad_boards (title, ad_type, address, description, rental_terms, price,
                                    contact_info, photo, lat, lon, is_active)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, ''), $6::DOUBLE PRECISION,
                     COALESCE($7, ''), $8, COALESCE($9, 52.9994), COALESCE($10, 78.6459),
                     COALESCE($11, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdBoard>(&query)
            .bind(&input.title)
            .bind(&input.ad_type)
            .bind(&input.address)
            .bind(&input.description)
            .bind(&input.rental_terms)
            .bind(input.price)
            .bind(&input.contact_info)
            .bind(&input.photo)
            .bind(input.lat)
            .bind(input.lon)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdBoard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ad_boards WHERE id = $1");
        sqlx::query_as::<_, AdBoard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List boards for the admin, ordered by `(ad_type, title)`.
    pub async fn list(pool: &PgPool, filter: &AdBoardFilter) -> Result<Vec<AdBoard>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.ad_type.is_some() {
            conditions.push(format!("ad_type = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.is_active.is_some() {
            conditions.push(format!("is_active = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR address ILIKE ${bind_idx} \
                 OR description ILIKE ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query =
            format!("SELECT {COLUMNS} FROM ad_boards {where_clause} ORDER BY ad_type, title, id");
        let mut q = sqlx::query_as::<_, AdBoard>(&query);
        if let Some(ad_type) = &filter.ad_type {
            q = q.bind(ad_type);
        }
        if let Some(is_active) = filter.is_active {
            q = q.bind(is_active);
        }
        if let Some(search) = &filter.search {
            q = q.bind(format!("%{search}%"));
        }
        q.fetch_all(pool).await
    }

    /// Every active board, ordered by `(ad_type, title)`.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<AdBoard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ad_boards
             WHERE is_active
             ORDER BY ad_type, title, id"
        );
        sqlx::query_as::<_, AdBoard>(&query).fetch_all(pool).await
    }

    /// Update a board. `clear_price` / `clear_photo` set those columns to NULL.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdBoard,
    ) -> Result<Option<AdBoard>, sqlx::Error> {
        let query = format!(
            "UPDATE ad_boards SET
                title = COALESCE($2, title),
                ad_type = COALESCE($3, ad_type),
                address = COALESCE($4, address),
                description = COALESCE($5, description),
                rental_terms = COALESCE($6, rental_terms),
                price = CASE WHEN $8 THEN NULL
                             ELSE COALESCE($7::DOUBLE PRECISION, price::DOUBLE PRECISION) END,
                contact_info = COALESCE($9, contact_info),
                photo = CASE WHEN $11 THEN NULL ELSE COALESCE($10, photo) END,
                lat = COALESCE($12, lat),
                lon = COALESCE($13, lon),
                is_active = COALESCE($14, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdBoard>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.ad_type)
            .bind(&input.address)
            .bind(&input.description)
            .bind(&input.rental_terms)
            .bind(input.price)
            .bind(input.clear_price)
            .bind(&input.contact_info)
            .bind(&input.photo)
            .bind(input.clear_photo)
            .bind(input.lat)
            .bind(input.lon)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ad_boards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
