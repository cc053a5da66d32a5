//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ad_board_repo;
pub mod feature_repo;
pub mod gallery_repo;
pub mod page_repo;
pub mod section_repo;
pub mod service_repo;
pub mod site_settings_repo;
pub mod slider_repo;

pub use ad_board_repo::AdBoardRepo;
pub use feature_repo::{FeatureRepo, FeaturesSectionRepo};
pub use gallery_repo::{GalleryImageRepo, GallerySectionRepo};
pub use page_repo::PageRepo;
pub use section_repo::{HeroSectionRepo, HtmlSectionRepo, TextHtmlSectionRepo, TextImageSectionRepo};
pub use service_repo::{ServiceCardRepo, ServicesSectionRepo};
pub use site_settings_repo::SiteSettingsRepo;
pub use slider_repo::{SlideRepo, SliderSectionRepo};
