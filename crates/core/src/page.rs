//! Page categories, slug rules and the home page fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Slug of the page served at `/`.
pub const HOME_SLUG: &str = "home";

/// Maximum slug length (matches the `pages.slug` column).
pub const MAX_SLUG_LENGTH: usize = 50;

/// Title used for the home placeholder when no site settings exist.
pub const FALLBACK_SITE_TITLE: &str = "Триал - Рекламное агентство";

/// Meta description used for the home placeholder.
pub const FALLBACK_META_DESCRIPTION: &str = "Рекламное агентство полного цикла";

/// Section of the site a page belongs to.
///
/// The declaration order is the order the categories are offered in the
/// admin; the menu itself follows page order (see [`crate::menu`]).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PageCategory {
    Main,
    About,
    Outdoor,
    Interior,
    Printing,
    Souvenirs,
    #[default]
    Other,
}

impl PageCategory {
    pub const ALL: [PageCategory; 7] = [
        PageCategory::Main,
        PageCategory::About,
        PageCategory::Outdoor,
        PageCategory::Interior,
        PageCategory::Printing,
        PageCategory::Souvenirs,
        PageCategory::Other,
    ];

    /// Stored code.
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::Main => "main",
            PageCategory::About => "about",
            PageCategory::Outdoor => "outdoor",
            PageCategory::Interior => "interior",
            PageCategory::Printing => "printing",
            PageCategory::Souvenirs => "souvenirs",
            PageCategory::Other => "other",
        }
    }

    /// Human-readable label shown in navigation.
    pub fn label(self) -> &'static str {
        match self {
            PageCategory::Main => "Главная",
            PageCategory::About => "О нас",
            PageCategory::Outdoor => "Наружная реклама",
            PageCategory::Interior => "Интерьерная реклама",
            PageCategory::Printing => "Широкоформатная печать",
            PageCategory::Souvenirs => "Сувенирная продукция",
            PageCategory::Other => "Другое",
        }
    }

    /// Categories that never appear in the navigation menu.
    pub fn is_menu_excluded(self) -> bool {
        matches!(self, PageCategory::Main | PageCategory::About)
    }
}

impl fmt::Display for PageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid category '{s}'. Must be one of: {}",
                    PageCategory::ALL.map(PageCategory::as_str).join(", ")
                ))
            })
    }
}

/// Validate a page slug: non-empty, at most [`MAX_SLUG_LENGTH`] characters,
/// ASCII letters, digits, hyphens and underscores only.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' may only contain letters, digits, hyphens and underscores"
        )));
    }
    Ok(())
}

/// Validate a category code.
pub fn validate_category(code: &str) -> Result<(), CoreError> {
    code.parse::<PageCategory>().map(|_| ())
}

/// Title and description rendered at `/` when no published home page exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderPage {
    pub title: String,
    pub meta_description: String,
}

impl PlaceholderPage {
    /// Build the placeholder from the configured site name, if any.
    pub fn new(site_name: Option<&str>) -> Self {
        Self {
            title: site_name.unwrap_or(FALLBACK_SITE_TITLE).to_string(),
            meta_description: FALLBACK_META_DESCRIPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn category_codes_round_trip_through_from_str() {
        for category in PageCategory::ALL {
            assert_eq!(category.as_str().parse::<PageCategory>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_a_validation_error() {
        assert_matches!(
            "billboards".parse::<PageCategory>(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn only_main_and_about_are_menu_excluded() {
        let excluded: Vec<_> = PageCategory::ALL
            .into_iter()
            .filter(|c| c.is_menu_excluded())
            .collect();
        assert_eq!(excluded, vec![PageCategory::Main, PageCategory::About]);
    }

    #[test]
    fn category_serializes_as_code() {
        let json = serde_json::to_string(&PageCategory::Souvenirs).unwrap();
        assert_eq!(json, "\"souvenirs\"");
    }

    #[test]
    fn default_category_is_other() {
        assert_eq!(PageCategory::default(), PageCategory::Other);
    }

    #[test]
    fn slug_accepts_url_safe_values() {
        assert!(validate_slug("home").is_ok());
        assert!(validate_slug("outdoor-ads_2024").is_ok());
    }

    #[test]
    fn slug_rejects_bad_values() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug("наружная").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
    }

    #[test]
    fn placeholder_uses_site_name_when_present() {
        let page = PlaceholderPage::new(Some("Триал"));
        assert_eq!(page.title, "Триал");
        assert_eq!(page.meta_description, FALLBACK_META_DESCRIPTION);
    }

    #[test]
    fn placeholder_falls_back_without_settings() {
        let page = PlaceholderPage::new(None);
        assert_eq!(page.title, FALLBACK_SITE_TITLE);
    }
}
