//! Data every public page shares: site settings and the navigation menu.

use adsite_core::media::optional_public_url;
use adsite_core::menu::{build_menu, MenuProjection};
use adsite_core::site_settings::{
    DEFAULT_ADDRESS, DEFAULT_EMAIL, DEFAULT_PHONE, DEFAULT_SITE_NAME, DEFAULT_WORKING_HOURS,
};
use adsite_db::models::page::Page;
use adsite_db::models::site_settings::SiteSettings;
use adsite_db::repositories::{PageRepo, SiteSettingsRepo};
use adsite_db::DbPool;

/// Settings and menu loaded once per public request.
#[derive(Debug, Clone)]
pub struct SiteChrome {
    /// `None` until an administrator saves the settings.
    pub settings: Option<SiteSettings>,
    pub menu: MenuProjection<Page>,
}

/// One category of the navigation menu, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub category: &'static str,
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub url: String,
}

impl SiteChrome {
    /// Load the settings row and the menu in parallel.
    pub async fn load(pool: &DbPool) -> Result<Self, sqlx::Error> {
        let (settings, candidates) = tokio::try_join!(
            SiteSettingsRepo::get(pool),
            PageRepo::list_menu_candidates(pool),
        )?;
        Ok(Self::new(settings, candidates))
    }

    pub fn new(settings: Option<SiteSettings>, pages: Vec<Page>) -> Self {
        Self {
            settings,
            menu: build_menu(pages),
        }
    }

    /// The configured site name, if settings exist.
    pub fn configured_site_name(&self) -> Option<&str> {
        self.settings.as_ref().map(|s| s.site_name.as_str())
    }

    pub fn site_name(&self) -> &str {
        self.configured_site_name().unwrap_or(DEFAULT_SITE_NAME)
    }

    pub fn phone(&self) -> &str {
        self.settings.as_ref().map_or(DEFAULT_PHONE, |s| s.phone.as_str())
    }

    pub fn email(&self) -> &str {
        self.settings.as_ref().map_or(DEFAULT_EMAIL, |s| s.email.as_str())
    }

    pub fn address(&self) -> &str {
        self.settings
            .as_ref()
            .map_or(DEFAULT_ADDRESS, |s| s.address.as_str())
    }

    pub fn working_hours(&self) -> &str {
        self.settings
            .as_ref()
            .map_or(DEFAULT_WORKING_HOURS, |s| s.working_hours.as_str())
    }

    /// Public logo URL; empty when no logo is uploaded.
    pub fn logo_url(&self, media_base: &str) -> String {
        optional_public_url(
            media_base,
            self.settings.as_ref().and_then(|s| s.logo.as_deref()),
        )
    }

    /// The menu projection flattened into display structs.
    pub fn menu_groups(&self) -> Vec<MenuGroup> {
        self.menu
            .iter()
            .map(|(category, pages)| MenuGroup {
                category: category.as_str(),
                label: category.label(),
                items: pages
                    .iter()
                    .map(|p| MenuItem {
                        title: p.title.clone(),
                        url: p.url(),
                    })
                    .collect(),
            })
            .collect()
    }
}
