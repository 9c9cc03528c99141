//! Content models shared across GoDavaii crates.
//!
//! Everything here is immutable once built. The landing page, the per-city
//! pages and the SEO outputs all read from a [`SiteCatalog`] handed to them at
//! construction time, so tests can swap in fixture content.
#![allow(missing_docs)]

pub mod catalog;
pub mod cities;
pub mod error;
pub mod faq;
pub mod metrics;
pub mod showcase;
pub mod site;

pub use catalog::SiteCatalog;
pub use cities::{City, CitySlug};
pub use error::{ModelError, Result as ModelResult};
pub use faq::FaqEntry;
pub use metrics::LaunchMetrics;
pub use showcase::{SCREENSHOT_ASPECT_RATIO, Screenshot, Testimonial};
pub use site::SiteIdentity;
