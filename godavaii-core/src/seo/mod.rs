//! Search-engine outputs derived from a [`SiteCatalog`](godavaii_model::SiteCatalog).

pub mod metadata;
pub mod robots;
pub mod sitemap;
pub mod structured_data;

pub use metadata::{OpenGraph, PageMetadata, RobotsDirectives, TwitterCard};
pub use robots::RobotsPolicy;
pub use sitemap::{ChangeFrequency, Sitemap, SitemapEntry};
pub use structured_data::{JsonLd, to_json_ld};
