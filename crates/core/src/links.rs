//! Button/link resolution shared by every section type that can point
//! somewhere (text+image, text+HTML, slides, service cards).
//!
//! An internal link to another page always wins over the free-form external
//! URL. With neither set the link is empty and templates hide the button.

/// Resolve the effective URL from an optional internal page slug and an
/// external URL string.
pub fn resolve_link(internal_slug: Option<&str>, external_link: &str) -> String {
    match internal_slug {
        Some(slug) => page_url(slug),
        None => external_link.to_string(),
    }
}

/// Public URL of a page.
pub fn page_url(slug: &str) -> String {
    format!("/{slug}/")
}

/// An entity carrying an internal page link and/or an external URL.
pub trait Linkable {
    /// Slug of the linked page, if an internal link is set.
    fn internal_link_slug(&self) -> Option<&str>;

    /// External URL, empty when unset.
    fn external_link(&self) -> &str;

    /// The resolved link target.
    fn link(&self) -> String {
        resolve_link(self.internal_link_slug(), self.external_link())
    }
}
