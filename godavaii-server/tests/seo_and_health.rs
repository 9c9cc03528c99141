mod common;

use axum::http::{StatusCode, header};
use common::{build_site, build_site_with};
use serde_json::Value;

#[tokio::test]
async fn sitemap_lists_home_and_cities() {
    let site = build_site();
    let response = site.server.get("/sitemap.xml").await;
    response.assert_status_ok();
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/xml")
    );

    let xml = response.text();
    assert!(xml.contains("<loc>https://www.godavaii.com/</loc>"));
    assert!(xml.contains("<loc>https://www.godavaii.com/medicine-delivery/noida</loc>"));
    assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 2);
}

#[tokio::test]
async fn robots_points_at_sitemap() {
    let site = build_site();
    let response = site.server.get("/robots.txt").await;
    response.assert_status_ok();
    assert_eq!(
        response.text(),
        "User-Agent: *\nAllow: /\n\nHost: https://www.godavaii.com\nSitemap: https://www.godavaii.com/sitemap.xml\n"
    );
}

#[tokio::test]
async fn hsts_on_every_response_by_default() {
    let site = build_site();
    for path in ["/", "/robots.txt", "/medicine-delivery/mumbai", "/LOGO.png"] {
        let response = site.server.get(path).await;
        assert_eq!(
            response.headers()[header::STRICT_TRANSPORT_SECURITY],
            "max-age=63072000; includeSubDomains",
            "{path}"
        );
    }
}

#[tokio::test]
async fn https_only_hsts_needs_trusted_proxy() {
    let site = build_site_with(|config| {
        config.security.hsts.https_only = true;
        config.security.trust_proxy_headers = true;
    });

    let plain = site.server.get("/ping").await;
    assert!(
        plain
            .headers()
            .get(header::STRICT_TRANSPORT_SECURITY)
            .is_none()
    );

    let proxied = site
        .server
        .get("/ping")
        .add_header("X-Forwarded-Proto", "https")
        .await;
    assert!(
        proxied
            .headers()
            .contains_key(header::STRICT_TRANSPORT_SECURITY)
    );
}

#[tokio::test]
async fn ping_reports_version() {
    let site = build_site();
    let response = site.server.get("/ping").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_reports_catalog_and_assets() {
    let site = build_site();
    let body: Value = site.server.get("/health").await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["catalog"]["screenshots"], 3);
    assert_eq!(body["checks"]["catalog"]["cities"][0], "noida");
    assert_eq!(body["checks"]["public_assets"]["screenshots"]["/HOME.png"], true);
}

#[tokio::test]
async fn health_degrades_without_assets() {
    let site = build_site_with(|config| {
        config.site.public_dir = config.site.public_dir.join("missing");
    });
    let response = site.server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["public_assets"]["public_dir_exists"], false);
}
