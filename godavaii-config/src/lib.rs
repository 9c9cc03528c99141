//! Configuration for the GoDavaii site server.
//!
//! Values are layered from built-in defaults, an optional TOML file and the
//! process environment (optionally seeded from a `.env` file), in that order
//! of increasing precedence. Loading runs guard rails that either reject the
//! configuration outright or attach warnings for the caller to log.

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    Config, ConfigMetadata, HstsLayerConfig, HstsSettings, SecurityConfig,
    ServerConfig, SiteConfig, UiConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
