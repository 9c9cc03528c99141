use std::{path::Path, sync::Arc, time::Duration};

use axum_test::TestServer;
use chrono::{FixedOffset, TimeZone};
use godavaii_config::{
    Config, ConfigMetadata, HstsSettings, SecurityConfig, ServerConfig,
    SiteConfig, UiConfig,
};
use godavaii_core::ui::FixedClock;
use godavaii_model::{CitySlug, site::parse_base_url};
use godavaii_server::{AppState, create_app};
use tempfile::TempDir;

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub struct TestSite {
    pub server: TestServer,
    pub state: AppState,
    _tempdir: TempDir,
}

#[allow(unused)]
pub fn test_config(public_dir: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        site: SiteConfig {
            base_url: parse_base_url("https://www.godavaii.com").unwrap(),
            public_dir: public_dir.to_path_buf(),
            cities: vec![CitySlug::parse("noida").unwrap()],
        },
        ui: UiConfig {
            autoplay_period: Duration::from_millis(3500),
            ..UiConfig::default()
        },
        security: SecurityConfig {
            trust_proxy_headers: false,
            hsts: HstsSettings::default(),
        },
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

/// Clock frozen at 05 Sep 2024, 10:00 IST.
#[allow(unused)]
pub fn frozen_clock() -> Arc<FixedClock> {
    let ist = FixedOffset::east_opt(330 * 60).unwrap();
    Arc::new(FixedClock(
        ist.with_ymd_and_hms(2024, 9, 5, 10, 0, 0).unwrap(),
    ))
}

#[allow(unused)]
pub fn build_site_with(edit: impl FnOnce(&mut Config)) -> TestSite {
    let tempdir = tempfile::tempdir().unwrap();
    let public = tempdir.path().join("public");
    std::fs::create_dir_all(&public).unwrap();
    for asset in ["LOGO.png", "MEDICINES.png", "HOME.png"] {
        std::fs::write(public.join(asset), b"\x89PNG").unwrap();
    }

    let mut config = test_config(&public);
    edit(&mut config);

    let state = AppState::new(config).unwrap().with_clock(frozen_clock());
    let server = TestServer::new(create_app(state.clone())).unwrap();
    TestSite {
        server,
        state,
        _tempdir: tempdir,
    }
}

#[allow(unused)]
pub fn build_site() -> TestSite {
    build_site_with(|_| {})
}
