//! Server-rendered HTML views.
//!
//! Each section type has its own askama template; a page is rendered by
//! rendering its sections in display order and splicing the fragments into
//! the page layout. Links and media URLs are resolved here so templates only
//! print values.

use adsite_core::links::Linkable;
use adsite_core::map_export::{MapCenter, MAP_PAGE_TITLE};
use adsite_core::media::{optional_public_url, public_url};
use adsite_core::page::PlaceholderPage;
use adsite_core::sections::MediaPosition;
use adsite_db::models::features::{Feature, FeaturesSection};
use adsite_db::models::gallery::{GalleryImage, GallerySection};
use adsite_db::models::page_content::{ContentBlock, PageContent};
use adsite_db::models::sections::{HeroSection, HtmlSection, TextHtmlSection, TextImageSection};
use adsite_db::models::services::{ServiceCard, ServicesSection};
use adsite_db::models::slider::{Slide, SliderSection};
use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::site::{MenuGroup, SiteChrome};

/// Header and footer data shared by every public page.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_name: String,
    pub logo_url: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
    pub menu: Vec<MenuGroup>,
}

impl Layout {
    pub fn new(chrome: &SiteChrome, media_base: &str) -> Self {
        Self {
            site_name: chrome.site_name().to_string(),
            logo_url: chrome.logo_url(media_base),
            phone: chrome.phone().to_string(),
            email: chrome.email().to_string(),
            address: chrome.address().to_string(),
            working_hours: chrome.working_hours().to_string(),
            menu: chrome.menu_groups(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "page_detail.html")]
pub struct PageTemplate {
    pub layout: Layout,
    pub title: String,
    pub meta_description: String,
    /// Rendered section fragments, in display order.
    pub sections: Vec<String>,
}

impl PageTemplate {
    pub fn new(
        content: &PageContent,
        chrome: &SiteChrome,
        media_base: &str,
    ) -> Result<Self, askama::Error> {
        Ok(Self {
            layout: Layout::new(chrome, media_base),
            title: content.page.title.clone(),
            meta_description: content.page.meta_description.clone(),
            sections: render_sections(content, media_base)?,
        })
    }
}

#[derive(Template)]
#[template(path = "home_placeholder.html")]
pub struct HomePlaceholderTemplate {
    pub layout: Layout,
    pub title: String,
    pub meta_description: String,
}

impl HomePlaceholderTemplate {
    pub fn new(chrome: &SiteChrome, media_base: &str) -> Self {
        let placeholder = PlaceholderPage::new(chrome.configured_site_name());
        Self {
            layout: Layout::new(chrome, media_base),
            title: placeholder.title,
            meta_description: placeholder.meta_description,
        }
    }
}

#[derive(Template)]
#[template(path = "rental_map.html")]
pub struct RentalMapTemplate {
    pub layout: Layout,
    pub title: String,
    pub meta_description: String,
    pub center: MapCenter,
    pub marker_count: usize,
    /// Marker array, already escaped for inlining into `<script>`.
    pub markers_json: String,
}

impl RentalMapTemplate {
    pub fn new(
        chrome: &SiteChrome,
        media_base: &str,
        marker_count: usize,
        markers_json: String,
    ) -> Self {
        Self {
            layout: Layout::new(chrome, media_base),
            title: MAP_PAGE_TITLE.to_string(),
            meta_description: MAP_PAGE_TITLE.to_string(),
            center: MapCenter::default(),
            marker_count,
            markers_json,
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self {
            title: "Страница не найдена".to_string(),
        }
    }
}

/// Render a template into an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

// ---------------------------------------------------------------------------
// Section fragments
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "sections/hero.html")]
pub struct HeroView<'a> {
    pub s: &'a HeroSection,
    pub background_image: String,
}

#[derive(Debug)]
pub struct SlideView<'a> {
    pub s: &'a Slide,
    pub image: String,
    pub link: String,
}

#[derive(Template)]
#[template(path = "sections/slider.html")]
pub struct SliderView<'a> {
    pub s: &'a SliderSection,
    pub slides: Vec<SlideView<'a>>,
}

#[derive(Template)]
#[template(path = "sections/text_image.html")]
pub struct TextImageView<'a> {
    pub s: &'a TextImageSection,
    pub image: String,
    pub link: String,
    pub image_left: bool,
}

#[derive(Template)]
#[template(path = "sections/text_html.html")]
pub struct TextHtmlView<'a> {
    pub s: &'a TextHtmlSection,
    pub link: String,
    pub html_left: bool,
}

#[derive(Template)]
#[template(path = "sections/html.html")]
pub struct HtmlView<'a> {
    pub s: &'a HtmlSection,
}

#[derive(Debug)]
pub struct CardView<'a> {
    pub s: &'a ServiceCard,
    pub link: String,
}

#[derive(Template)]
#[template(path = "sections/services.html")]
pub struct ServicesView<'a> {
    pub s: &'a ServicesSection,
    pub cards: Vec<CardView<'a>>,
}

#[derive(Template)]
#[template(path = "sections/features.html")]
pub struct FeaturesView<'a> {
    pub s: &'a FeaturesSection,
    pub features: &'a [Feature],
}

#[derive(Debug)]
pub struct ImageView<'a> {
    pub s: &'a GalleryImage,
    pub url: String,
}

#[derive(Template)]
#[template(path = "sections/gallery.html")]
pub struct GalleryView<'a> {
    pub s: &'a GallerySection,
    pub images: Vec<ImageView<'a>>,
}

fn is_left(position: &str) -> bool {
    position.parse::<MediaPosition>().ok() == Some(MediaPosition::Left)
}

/// Render one section to an HTML fragment.
pub fn render_block(block: ContentBlock<'_>, media_base: &str) -> Result<String, askama::Error> {
    match block {
        ContentBlock::Hero(s) => HeroView {
            s,
            background_image: optional_public_url(media_base, s.background_image.as_deref()),
        }
        .render(),
        ContentBlock::Slider(slider) => SliderView {
            s: &slider.section,
            slides: slider
                .slides
                .iter()
                .map(|s| SlideView {
                    s,
                    image: public_url(media_base, &s.image),
                    link: s.link(),
                })
                .collect(),
        }
        .render(),
        ContentBlock::TextImage(s) => TextImageView {
            s,
            image: public_url(media_base, &s.image),
            link: s.link(),
            image_left: is_left(&s.image_position),
        }
        .render(),
        ContentBlock::TextHtml(s) => TextHtmlView {
            s,
            link: s.link(),
            html_left: is_left(&s.html_position),
        }
        .render(),
        ContentBlock::Html(s) => HtmlView { s }.render(),
        ContentBlock::Services(services) => ServicesView {
            s: &services.section,
            cards: services
                .cards
                .iter()
                .map(|s| CardView { s, link: s.link() })
                .collect(),
        }
        .render(),
        ContentBlock::Features(features) => FeaturesView {
            s: &features.section,
            features: &features.features,
        }
        .render(),
        ContentBlock::Gallery(gallery) => GalleryView {
            s: &gallery.section,
            images: gallery
                .images
                .iter()
                .map(|s| ImageView {
                    s,
                    url: public_url(media_base, &s.image),
                })
                .collect(),
        }
        .render(),
    }
}

/// Render every section of a page in display order.
pub fn render_sections(
    content: &PageContent,
    media_base: &str,
) -> Result<Vec<String>, askama::Error> {
    content
        .blocks()
        .into_iter()
        .map(|block| render_block(block, media_base))
        .collect()
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error wrapper for public HTML routes.
///
/// Not-found errors render the not-found page; everything else falls back to
/// the JSON error response of [`AppError`].
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<sqlx::Error> for HtmlError {
    fn from(err: sqlx::Error) -> Self {
        Self(AppError::Database(err))
    }
}

impl From<askama::Error> for HtmlError {
    fn from(err: askama::Error) -> Self {
        Self(AppError::Template(err))
    }
}

impl From<adsite_core::error::CoreError> for HtmlError {
    fn from(err: adsite_core::error::CoreError) -> Self {
        Self(AppError::Core(err))
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        if !self.0.is_not_found() {
            return self.0.into_response();
        }
        match NotFoundTemplate::default().render() {
            Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
            Err(err) => AppError::Template(err).into_response(),
        }
    }
}
