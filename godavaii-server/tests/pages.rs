mod common;

use axum::http::StatusCode;
use common::build_site;

#[tokio::test]
async fn home_renders_first_items_and_closed_drawer() {
    let site = build_site();
    let response = site.server.get("/").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("<title>Medicine Delivery in Under 30 Minutes | GoDavaii</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="https://www.godavaii.com/">"#));
    assert!(html.contains(r#"src="/LOGO.png" alt="Logo""#));
    assert!(html.contains("transform: translateX(-0%)"));
    assert!(html.contains(r#"data-autoplay-ms="3500""#));
    assert!(!html.contains(r#"id="mobile-nav""#));
    assert!(!html.contains("overflow:hidden"));
    // Previous from the first screenshot wraps to the last one.
    assert!(html.contains(r#"href="/?shot=2&amp;slide=0#app-preview" aria-label="Previous Screenshot""#));
}

#[tokio::test]
async fn home_carries_structured_data_and_status_date() {
    let site = build_site();
    let html = site.server.get("/").await.text();

    assert!(html.contains(r#""@type":"Organization""#));
    assert!(html.contains(r#""@type":"WebSite""#));
    assert!(html.contains(r#""@type":"FAQPage""#));
    assert!(html.contains("As of 05 Sept 2024"));
    assert!(html.contains("\u{a9} 2024 GoDavaii. All rights reserved."));
    assert!(html.contains("Pre-launch"));
}

#[tokio::test]
async fn query_selects_screenshot_and_testimonial() {
    let site = build_site();
    let html = site.server.get("/?shot=2&slide=3").await.text();

    assert!(html.contains(r#"src="/HOME.png" alt="Home""#));
    assert!(html.contains("transform: translateX(-300%)"));
    // Next from the last screenshot wraps to the first, keeping the slide.
    assert!(html.contains(r#"href="/?shot=0&amp;slide=3#app-preview" aria-label="Next Screenshot""#));
    assert!(html.contains(r#"aria-label="Go to testimonial 4" aria-current="true""#));
}

#[tokio::test]
async fn invalid_indices_fall_back_to_first_item() {
    let site = build_site();
    for query in ["/?shot=9", "/?shot=-1", "/?shot=abc&slide=99"] {
        let response = site.server.get(query).await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"src="/LOGO.png" alt="Logo""#), "{query}");
        assert!(html.contains("transform: translateX(-0%)"), "{query}");
    }
}

#[tokio::test]
async fn testimonial_slide_bounds() {
    let site = build_site();

    let html = site.server.get("/?slide=5").await.text();
    assert!(html.contains("transform: translateX(-500%)"));
    assert!(html.contains(r#"aria-label="Go to testimonial 6" aria-current="true""#));
    assert!(html.contains(r#"data-autoplay-ms="3500""#));

    let html = site.server.get("/?slide=6").await.text();
    assert!(html.contains("transform: translateX(-0%)"));
    assert!(html.contains(r#"aria-label="Go to testimonial 1" aria-current="true""#));
}

#[tokio::test]
async fn open_menu_locks_body_scroll() {
    let site = build_site();
    let html = site.server.get("/?menu=open").await.text();

    assert!(html.contains(r#"<body style="overflow:hidden">"#));
    assert!(html.contains(r#"id="mobile-nav""#));
    assert!(html.contains(r#"aria-label="Close navigation""#));
    // Drawer links close the drawer.
    assert!(html.contains(r#"href="/?shot=0&amp;slide=0#features""#));
    assert!(!html.contains(r#"menu=open#"#));
}

#[tokio::test]
async fn served_city_renders() {
    let site = build_site();
    let response = site.server.get("/medicine-delivery/noida").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("<title>Medicine Delivery in Noida (Under 30 Minutes) | GoDavaii</title>"));
    assert!(html.contains("Medicine Delivery in Noida \u{2013} Under 30 Minutes"));
    assert!(html.contains(
        r#"<link rel="canonical" href="https://www.godavaii.com/medicine-delivery/noida">"#
    ));
    assert!(html.contains(r#""@type":"Service""#));
    assert!(html.contains(r#"href="/#download""#));
}

#[tokio::test]
async fn city_slug_is_case_insensitive() {
    let site = build_site();
    site.server
        .get("/medicine-delivery/NOIDA")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn unserved_city_is_not_found() {
    let site = build_site();
    let response = site.server.get("/medicine-delivery/mumbai").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("Page not found"));
    assert!(html.contains("noindex"));
}

#[tokio::test]
async fn allow_list_comes_from_config() {
    let site = common::build_site_with(|config| {
        config
            .site
            .cities
            .push(godavaii_model::CitySlug::parse("greater-noida").unwrap());
    });
    let html = site
        .server
        .get("/medicine-delivery/greater-noida")
        .await
        .text();
    assert!(html.contains("Medicine Delivery in Greater Noida"));
}

#[tokio::test]
async fn static_assets_and_unknown_paths() {
    let site = build_site();
    let asset = site.server.get("/HOME.png").await;
    asset.assert_status_ok();
    assert_eq!(asset.as_bytes().as_ref(), b"\x89PNG");

    let missing = site.server.get("/nope.html").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert!(missing.text().contains("Nothing lives at /nope.html"));
}
