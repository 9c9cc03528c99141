use thiserror::Error;

use super::models::Config;

/// Minimum HSTS max-age accepted by browser preload lists (one year).
const HSTS_PRELOAD_MIN_AGE: u64 = 31_536_000;

/// Offsets must stay strictly within one day.
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("at least one served city is required (SERVED_CITIES / site.cities)")]
    EmptyCityList,
    #[error("AUTOPLAY_PERIOD_MS must be greater than zero")]
    ZeroAutoplayPeriod,
    #[error("SWIPE_CLOSE_THRESHOLD_PX must be a positive number, got {value}")]
    InvalidSwipeThreshold { value: f32 },
    #[error(
        "DISPLAY_UTC_OFFSET_MINUTES must be within +-{MAX_UTC_OFFSET_MINUTES}, got {value}"
    )]
    InvalidUtcOffset { value: i32 },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.site.cities.is_empty() {
        return Err(ConfigGuardRailError::EmptyCityList);
    }
    if config.ui.autoplay_period.is_zero() {
        return Err(ConfigGuardRailError::ZeroAutoplayPeriod);
    }
    let threshold = config.ui.swipe_close_threshold_px;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ConfigGuardRailError::InvalidSwipeThreshold {
            value: threshold,
        });
    }
    let offset = config.ui.display_utc_offset_minutes;
    if offset.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(ConfigGuardRailError::InvalidUtcOffset { value: offset });
    }

    if !config.dev_mode && config.site.base_url.scheme() != "https" {
        warnings.push_with_hint(
            format!(
                "SITE_BASE_URL {} is not HTTPS; canonical links and the sitemap will advertise it",
                config.site.base_url
            ),
            "Use the public https:// origin outside DEV_MODE",
        );
    }

    check_public_assets(config, &mut warnings);

    let hsts = &config.security.hsts;
    if hsts.preload && (!hsts.include_subdomains || hsts.max_age < HSTS_PRELOAD_MIN_AGE) {
        warnings.push_with_hint(
            "HSTS_PRELOAD is set but the policy is not preload-eligible",
            "Preload requires includeSubDomains and a max-age of at least 31536000",
        );
    }

    if hsts.https_only && !config.security.trust_proxy_headers {
        warnings.push_with_hint(
            "HSTS_HTTPS_ONLY is true but TRUST_PROXY_HEADERS is false",
            "If TLS terminates at a proxy, enable TRUST_PROXY_HEADERS so X-Forwarded-Proto is honoured",
        );
    }

    Ok(warnings)
}

fn check_public_assets(config: &Config, warnings: &mut ConfigWarnings) {
    let public_dir = config.public_dir();
    if !public_dir.is_dir() {
        warnings.push_with_hint(
            format!("public directory {} does not exist", public_dir.display()),
            "Set PUBLIC_DIR to the folder holding the logo, screenshots and og-image.png",
        );
        return;
    }

    for asset in godavaii_model::catalog::default_screenshots() {
        let path = public_dir.join(asset.src.trim_start_matches('/'));
        if !path.is_file() {
            warnings.push(format!(
                "screenshot asset {} is missing from {}",
                asset.src,
                public_dir.display()
            ));
        }
    }
}
