//! # GoDavaii Core
//!
//! Behavior behind the GoDavaii marketing site.
//!
//! ## Overview
//!
//! - [`ui`]: the interactive view-state of the landing page. A mobile
//!   navigation drawer with a scoped scroll lock and swipe-to-close, a manual
//!   screenshot carousel, an autoplaying testimonial carousel that pauses on
//!   hover, and the "data as of" display date.
//! - [`cities`]: resolution of `/medicine-delivery/{city}` against the served
//!   city allow-list.
//! - [`seo`]: sitemap, robots policy, page metadata and JSON-LD structured
//!   data, all derived from a [`SiteCatalog`].
//! - [`routes`]: route constants shared by the server and its tests.
//!
//! Every component takes its content explicitly at construction; nothing here
//! reads global state.
//!
//! ## Example
//!
//! ```
//! use godavaii_core::ui::carousel::ScreenshotCarousel;
//! use godavaii_model::SiteCatalog;
//!
//! let catalog = SiteCatalog::default();
//! let mut carousel = ScreenshotCarousel::new(&catalog.screenshots).unwrap();
//! carousel.previous();
//! assert_eq!(carousel.current_index(), 2);
//! assert_eq!(carousel.current().alt, "Home");
//! ```

pub mod cities;
pub mod error;
pub mod routes;
pub mod seo;
pub mod ui;

pub use error::{CoreError, Result};
pub use godavaii_model::SiteCatalog;
