pub mod error;

use once_cell::sync::Lazy;
use std::{fs, path::PathBuf, time::Duration};

use godavaii_model::{CitySlug, SiteIdentity, site::parse_base_url};
use tracing::debug;

use self::error::ConfigLoadError;
use crate::{
    models::{
        Config, ConfigMetadata, DEFAULT_AUTOPLAY_PERIOD_MS,
        DEFAULT_DISPLAY_UTC_OFFSET_MINUTES, DEFAULT_HOST, DEFAULT_PORT,
        DEFAULT_PUBLIC_DIR, DEFAULT_SWIPE_CLOSE_THRESHOLD_PX, HstsSettings,
        SecurityConfig, ServerConfig, SiteConfig, UiConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("godavaii.toml"),
        PathBuf::from("config/godavaii.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Seed the process environment from `.env`, then load.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Load against an already gathered environment. Neither `.env` nor the
    /// process environment is consulted.
    pub fn load_with_env(
        &self,
        env_config: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path, config_present) =
            self.load_file_config(&env_config)?;

        let (config, warnings) = self.compose_config(
            file_config,
            env_config,
            config_path,
            config_present,
        )?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>, bool), ConfigLoadError>
    {
        let mut source = ConfigPathSource::default();

        if let Some(explicit) = &self.options.config_path {
            source.explicit = Some(explicit.clone());
        } else if let Some(from_env) = &env_config.config_path {
            source.env = Some(from_env.clone());
        }

        if source.is_empty() {
            source.default = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
        }

        let Some((path, provenance)) = source.resolved_path() else {
            return Ok((None, None, false));
        };

        if !path.exists() {
            if provenance.is_explicit() {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None, false));
        }

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;
        debug!(path = %path.display(), ?provenance, "loaded configuration file");

        Ok((Some(file_config), Some(path), true))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
        config_present: bool,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if !config_present {
            warnings.push_with_hint(
                "No godavaii.toml detected; using environment variables and defaults",
                "Create godavaii.toml or set GODAVAII_CONFIG_PATH to pin site settings",
            );
        }

        let FileConfig {
            server: file_server,
            site: file_site,
            ui: file_ui,
            security: file_security,
            dev_mode: file_dev_mode,
        } = file_config.unwrap_or_default();

        let server = ServerConfig {
            host: env
                .server_host
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
        };

        let raw_base_url = env
            .site_base_url
            .or(file_site.base_url)
            .unwrap_or_else(|| SiteIdentity::DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_base_url)
            .map_err(|source| ConfigLoadError::InvalidBaseUrl { source })?;

        let raw_cities = env
            .served_cities
            .or(file_site.cities)
            .unwrap_or_else(|| vec!["noida".to_string()]);
        let cities = parse_cities(raw_cities, &mut warnings)?;

        let site = SiteConfig {
            base_url,
            public_dir: env
                .public_dir
                .or(file_site.public_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            cities,
        };

        let ui = UiConfig {
            autoplay_period: Duration::from_millis(
                env.autoplay_period_ms
                    .or(file_ui.autoplay_period_ms)
                    .unwrap_or(DEFAULT_AUTOPLAY_PERIOD_MS),
            ),
            swipe_close_threshold_px: env
                .swipe_close_threshold_px
                .or(file_ui.swipe_close_threshold_px)
                .unwrap_or(DEFAULT_SWIPE_CLOSE_THRESHOLD_PX),
            display_utc_offset_minutes: env
                .display_utc_offset_minutes
                .or(file_ui.display_utc_offset_minutes)
                .unwrap_or(DEFAULT_DISPLAY_UTC_OFFSET_MINUTES),
        };

        let hsts_defaults = HstsSettings::default();
        let security = SecurityConfig {
            trust_proxy_headers: env
                .trust_proxy_headers
                .or(file_security.trust_proxy_headers)
                .unwrap_or(false),
            hsts: HstsSettings {
                max_age: env
                    .hsts_max_age
                    .or(file_security.hsts.max_age)
                    .unwrap_or(hsts_defaults.max_age),
                include_subdomains: env
                    .hsts_include_subdomains
                    .or(file_security.hsts.include_subdomains)
                    .unwrap_or(hsts_defaults.include_subdomains),
                preload: env
                    .hsts_preload
                    .or(file_security.hsts.preload)
                    .unwrap_or(hsts_defaults.preload),
                https_only: env
                    .hsts_https_only
                    .or(file_security.hsts.https_only)
                    .unwrap_or(hsts_defaults.https_only),
            },
        };

        let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);

        let config = Config {
            server,
            site,
            ui,
            security,
            dev_mode,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded: false,
            },
        };

        let guard_warnings = validation::apply_guard_rails(&config)?;
        warnings.extend(guard_warnings);

        Ok((config, warnings))
    }
}

fn parse_cities(
    raw: Vec<String>,
    warnings: &mut ConfigWarnings,
) -> Result<Vec<CitySlug>, ConfigLoadError> {
    let mut cities: Vec<CitySlug> = Vec::with_capacity(raw.len());
    for entry in raw {
        let slug = CitySlug::parse(&entry).map_err(|source| {
            ConfigLoadError::InvalidCity {
                raw: entry.clone(),
                source,
            }
        })?;
        if cities.contains(&slug) {
            warnings.push(format!("served city '{slug}' listed more than once"));
            continue;
        }
        cities.push(slug);
    }
    Ok(cities)
}

#[derive(Debug, Default)]
struct ConfigPathSource {
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    default: Option<PathBuf>,
}

impl ConfigPathSource {
    fn is_empty(&self) -> bool {
        self.explicit.is_none() && self.env.is_none() && self.default.is_none()
    }

    fn resolved_path(&self) -> Option<(PathBuf, ConfigPathProvenance)> {
        if let Some(path) = &self.explicit {
            return Some((path.clone(), ConfigPathProvenance::Explicit));
        }
        if let Some(path) = &self.env {
            return Some((path.clone(), ConfigPathProvenance::Env));
        }
        if let Some(path) = &self.default {
            return Some((path.clone(), ConfigPathProvenance::Default));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigPathProvenance {
    Explicit,
    Env,
    Default,
}

impl ConfigPathProvenance {
    fn is_explicit(self) -> bool {
        matches!(
            self,
            ConfigPathProvenance::Explicit | ConfigPathProvenance::Env
        )
    }
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
