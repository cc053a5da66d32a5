//! A page together with all of its sections, ready for rendering.

use std::collections::HashMap;

use adsite_core::sections::Ordered;
use adsite_core::types::DbId;
use serde::Serialize;

use crate::models::features::{Feature, FeaturesSection};
use crate::models::gallery::{GalleryImage, GallerySection};
use crate::models::page::Page;
use crate::models::sections::{HeroSection, HtmlSection, TextHtmlSection, TextImageSection};
use crate::models::services::{ServiceCard, ServicesSection};
use crate::models::slider::{Slide, SliderSection};

/// A slider with its slides in display order.
#[derive(Debug, Clone, Serialize)]
pub struct SliderWithSlides {
    #[serde(flatten)]
    pub section: SliderSection,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesWithCards {
    #[serde(flatten)]
    pub section: ServicesSection,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturesWithItems {
    #[serde(flatten)]
    pub section: FeaturesSection,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryWithImages {
    #[serde(flatten)]
    pub section: GallerySection,
    pub images: Vec<GalleryImage>,
}

/// Every section of one page, each list sorted by `(sort_order, id)`.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub page: Page,
    pub hero_sections: Vec<HeroSection>,
    pub slider_sections: Vec<SliderWithSlides>,
    pub text_image_sections: Vec<TextImageSection>,
    pub text_html_sections: Vec<TextHtmlSection>,
    pub html_sections: Vec<HtmlSection>,
    pub services_sections: Vec<ServicesWithCards>,
    pub features_sections: Vec<FeaturesWithItems>,
    pub gallery_sections: Vec<GalleryWithImages>,
}

/// One section of any type, borrowed from a [`PageContent`].
#[derive(Debug, Clone, Copy)]
pub enum ContentBlock<'a> {
    Hero(&'a HeroSection),
    Slider(&'a SliderWithSlides),
    TextImage(&'a TextImageSection),
    TextHtml(&'a TextHtmlSection),
    Html(&'a HtmlSection),
    Services(&'a ServicesWithCards),
    Features(&'a FeaturesWithItems),
    Gallery(&'a GalleryWithImages),
}

impl ContentBlock<'_> {
    /// Position of the section type when two sections share a `sort_order`.
    fn type_rank(&self) -> u8 {
        match self {
            ContentBlock::Hero(_) => 0,
            ContentBlock::Slider(_) => 1,
            ContentBlock::TextImage(_) => 2,
            ContentBlock::TextHtml(_) => 3,
            ContentBlock::Html(_) => 4,
            ContentBlock::Services(_) => 5,
            ContentBlock::Features(_) => 6,
            ContentBlock::Gallery(_) => 7,
        }
    }

    fn sort_key(&self) -> (i32, u8, DbId) {
        let (sort_order, id) = match self {
            ContentBlock::Hero(s) => (s.sort_order(), s.id()),
            ContentBlock::Slider(s) => (s.section.sort_order(), s.section.id()),
            ContentBlock::TextImage(s) => (s.sort_order(), s.id()),
            ContentBlock::TextHtml(s) => (s.sort_order(), s.id()),
            ContentBlock::Html(s) => (s.sort_order(), s.id()),
            ContentBlock::Services(s) => (s.section.sort_order(), s.section.id()),
            ContentBlock::Features(s) => (s.section.sort_order(), s.section.id()),
            ContentBlock::Gallery(s) => (s.section.sort_order(), s.section.id()),
        };
        (sort_order, self.type_rank(), id)
    }
}

impl PageContent {
    /// All sections merged into one sequence for top-to-bottom rendering.
    ///
    /// Ordered by `sort_order`; sections of different types with equal
    /// `sort_order` follow the fixed type order hero, slider, text+image,
    /// text+HTML, HTML, services, features, gallery.
    pub fn blocks(&self) -> Vec<ContentBlock<'_>> {
        let mut blocks: Vec<ContentBlock<'_>> = self
            .hero_sections
            .iter()
            .map(ContentBlock::Hero)
            .chain(self.slider_sections.iter().map(ContentBlock::Slider))
            .chain(self.text_image_sections.iter().map(ContentBlock::TextImage))
            .chain(self.text_html_sections.iter().map(ContentBlock::TextHtml))
            .chain(self.html_sections.iter().map(ContentBlock::Html))
            .chain(self.services_sections.iter().map(ContentBlock::Services))
            .chain(self.features_sections.iter().map(ContentBlock::Features))
            .chain(self.gallery_sections.iter().map(ContentBlock::Gallery))
            .collect();
        blocks.sort_by_key(ContentBlock::sort_key);
        blocks
    }

    /// Whether the page has no sections at all.
    pub fn is_empty(&self) -> bool {
        self.hero_sections.is_empty()
            && self.slider_sections.is_empty()
            && self.text_image_sections.is_empty()
            && self.text_html_sections.is_empty()
            && self.html_sections.is_empty()
            && self.services_sections.is_empty()
            && self.features_sections.is_empty()
            && self.gallery_sections.is_empty()
    }
}

/// Attach children to their parents, preserving the order of both lists.
///
/// `parent_of` returns the parent id of a child row.
pub(crate) fn group_children<P, C, W>(
    parents: Vec<P>,
    children: Vec<C>,
    parent_of: impl Fn(&C) -> DbId,
    wrap: impl Fn(P, Vec<C>) -> W,
) -> Vec<W>
where
    P: Ordered,
{
    let mut by_parent: HashMap<DbId, Vec<C>> = HashMap::new();
    for child in children {
        by_parent.entry(parent_of(&child)).or_default().push(child);
    }
    parents
        .into_iter()
        .map(|parent| {
            let kids = by_parent.remove(&parent.id()).unwrap_or_default();
            wrap(parent, kids)
        })
        .collect()
}
