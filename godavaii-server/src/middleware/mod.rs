//! Response middleware for the site.

pub mod hsts;

pub use hsts::{HstsConfig, HstsLayer, HstsMiddleware};
