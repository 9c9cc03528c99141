use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{parse_bool_var, parse_csv_var, parse_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub site: FileSiteConfig,
    #[serde(default)]
    pub ui: FileUiConfig,
    #[serde(default)]
    pub security: FileSecurityConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileSiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileUiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_period_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_close_threshold_px: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileSecurityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_proxy_headers: Option<bool>,
    #[serde(default)]
    pub hsts: FileHstsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileHstsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_subdomains: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_only: Option<bool>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub config_path: Option<PathBuf>,
    pub site_base_url: Option<String>,
    pub public_dir: Option<PathBuf>,
    pub served_cities: Option<Vec<String>>,
    pub autoplay_period_ms: Option<u64>,
    pub swipe_close_threshold_px: Option<f32>,
    pub display_utc_offset_minutes: Option<i32>,
    pub hsts_max_age: Option<u64>,
    pub hsts_include_subdomains: Option<bool>,
    pub hsts_preload: Option<bool>,
    pub hsts_https_only: Option<bool>,
    pub trust_proxy_headers: Option<bool>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        let mut env_config = Self::default();

        env_config.server_host = std::env::var("SERVER_HOST").ok();
        env_config.server_port = parse_var("SERVER_PORT");
        env_config.config_path = std::env::var("GODAVAII_CONFIG_PATH")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        env_config.site_base_url = std::env::var("SITE_BASE_URL").ok();
        env_config.public_dir =
            std::env::var("PUBLIC_DIR").ok().map(PathBuf::from);
        env_config.served_cities = parse_csv_var("SERVED_CITIES");

        env_config.autoplay_period_ms = parse_var("AUTOPLAY_PERIOD_MS");
        env_config.swipe_close_threshold_px =
            parse_var("SWIPE_CLOSE_THRESHOLD_PX");
        env_config.display_utc_offset_minutes =
            parse_var("DISPLAY_UTC_OFFSET_MINUTES");

        env_config.hsts_max_age = parse_var("HSTS_MAX_AGE");
        env_config.hsts_include_subdomains =
            parse_bool_var("HSTS_INCLUDE_SUBDOMAINS");
        env_config.hsts_preload = parse_bool_var("HSTS_PRELOAD");
        env_config.hsts_https_only = parse_bool_var("HSTS_HTTPS_ONLY");
        env_config.trust_proxy_headers = parse_bool_var("TRUST_PROXY_HEADERS");
        env_config.dev_mode = parse_bool_var("DEV_MODE");

        env_config
    }
}
