//! Navigation menu projection.
//!
//! Groups the pages that should appear in the site navigation by category.
//! A page qualifies when it is published, flagged `show_in_menu` and its
//! category is not `main` or `about`. Within a category pages are ordered by
//! `(menu_order, title)`; categories appear in the order their first page
//! does, and categories without pages are absent.

use indexmap::IndexMap;

use crate::page::PageCategory;

/// Category -> ordered pages, in first-appearance order.
pub type MenuProjection<T> = IndexMap<PageCategory, Vec<T>>;

/// The page attributes the menu projection reads.
pub trait MenuCandidate {
    fn title(&self) -> &str;
    fn menu_order(&self) -> i32;
    fn is_published(&self) -> bool;
    fn show_in_menu(&self) -> bool;

    /// Parsed category; `None` for codes this build does not know.
    fn category(&self) -> Option<PageCategory>;
}

/// Whether a page belongs in the navigation menu.
pub fn is_menu_eligible<T: MenuCandidate>(page: &T) -> bool {
    page.is_published()
        && page.show_in_menu()
        && page.category().is_some_and(|c| !c.is_menu_excluded())
}

/// Build the menu projection from any collection of pages.
///
/// Ineligible pages are dropped, the rest are sorted by
/// `(menu_order, title)` and appended to their category's list in one pass.
/// The sort is stable, so callers that pre-sort (e.g. by id) keep that order
/// for full ties.
pub fn build_menu<T, I>(pages: I) -> MenuProjection<T>
where
    T: MenuCandidate,
    I: IntoIterator<Item = T>,
{
    let mut eligible: Vec<T> = pages.into_iter().filter(is_menu_eligible).collect();
    eligible.sort_by(|a, b| {
        a.menu_order()
            .cmp(&b.menu_order())
            .then_with(|| a.title().cmp(b.title()))
    });

    let mut menu: MenuProjection<T> = IndexMap::new();
    for page in eligible {
        // Eligibility guarantees a known category.
        if let Some(category) = page.category() {
            menu.entry(category).or_default().push(page);
        }
    }
    menu
}
