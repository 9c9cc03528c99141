pub mod sources;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use godavaii_model::{City, CitySlug, ModelResult, SiteCatalog, SiteIdentity};
use url::Url;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_AUTOPLAY_PERIOD_MS: u64 = 3500;
pub const DEFAULT_SWIPE_CLOSE_THRESHOLD_PX: f32 = 60.0;
pub const DEFAULT_DISPLAY_UTC_OFFSET_MINUTES: i32 = 330;
pub const DEFAULT_HSTS_MAX_AGE: u64 = 63_072_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub ui: UiConfig,
    pub security: SecurityConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Default content with the configured base URL and city allow-list.
    pub fn catalog(&self) -> ModelResult<SiteCatalog> {
        let identity = SiteIdentity {
            base_url: self.site.base_url.clone(),
            ..SiteIdentity::godavaii()
        };
        let cities = self
            .site
            .cities
            .iter()
            .cloned()
            .map(City::from_slug)
            .collect();
        let catalog = SiteCatalog::default()
            .with_identity(identity)
            .with_cities(cities);
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn public_dir(&self) -> &Path {
        &self.site.public_dir
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub base_url: Url,
    pub public_dir: PathBuf,
    /// Served city allow-list, deduplicated, in configured order.
    pub cities: Vec<CitySlug>,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub autoplay_period: Duration,
    pub swipe_close_threshold_px: f32,
    pub display_utc_offset_minutes: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            autoplay_period: Duration::from_millis(DEFAULT_AUTOPLAY_PERIOD_MS),
            swipe_close_threshold_px: DEFAULT_SWIPE_CLOSE_THRESHOLD_PX,
            display_utc_offset_minutes: DEFAULT_DISPLAY_UTC_OFFSET_MINUTES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub trust_proxy_headers: bool,
    pub hsts: HstsSettings,
}

#[derive(Debug, Clone)]
pub struct HstsSettings {
    pub max_age: u64,
    pub include_subdomains: bool,
    pub preload: bool,
    /// Only attach the header to requests known to be HTTPS.
    pub https_only: bool,
}

impl Default for HstsSettings {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_HSTS_MAX_AGE,
            include_subdomains: true,
            preload: false,
            https_only: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HstsLayerConfig {
    pub max_age: u64,
    pub include_subdomains: bool,
    pub preload: bool,
    pub https_only: bool,
    pub trust_proxy_headers: bool,
}

impl From<&SecurityConfig> for HstsLayerConfig {
    fn from(value: &SecurityConfig) -> Self {
        HstsLayerConfig {
            max_age: value.hsts.max_age,
            include_subdomains: value.hsts.include_subdomains,
            preload: value.hsts.preload,
            https_only: value.hsts.https_only,
            trust_proxy_headers: value.trust_proxy_headers,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
