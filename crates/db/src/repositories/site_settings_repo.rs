//! Repository for the `site_settings` singleton.

use adsite_core::site_settings::SITE_SETTINGS_ID;
use sqlx::PgPool;

use crate::models::site_settings::{SaveSiteSettings, SiteSettings};

const COLUMNS: &str =
    "id, site_name, logo, phone, email, address, working_hours, created_at, updated_at";

pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// The settings row, or `None` if it was never saved (or was deleted).
    pub async fn get(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SITE_SETTINGS_ID)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace the settings row.
    ///
    /// A single upsert on the fixed id: concurrent saves serialize on the
    /// primary key and the last one wins, so at most one row ever exists.
    pub async fn save(pool: &PgPool, input: &SaveSiteSettings) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (id, site_name, logo, phone, email, address, working_hours)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                site_name = EXCLUDED.site_name,
                logo = EXCLUDED.logo,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                working_hours = EXCLUDED.working_hours
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SITE_SETTINGS_ID)
            .bind(&input.site_name)
            .bind(&input.logo)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.working_hours)
            .fetch_one(pool)
            .await
    }

    /// Remove the settings row. Returns `true` if it existed.
    pub async fn delete(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_settings WHERE id = $1")
            .bind(SITE_SETTINGS_ID)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
