use chrono::{TimeZone, Utc};
use godavaii_core::{
    cities,
    seo::{RobotsPolicy, Sitemap},
};
use godavaii_model::{City, CitySlug, SiteCatalog};

fn catalog_with(slugs: &[&str]) -> SiteCatalog {
    let cities = slugs
        .iter()
        .map(|slug| City::from_slug(CitySlug::parse(slug).unwrap()))
        .collect();
    SiteCatalog::default().with_cities(cities)
}

#[test]
fn sitemap_lists_home_and_every_served_city() {
    let catalog = catalog_with(&["noida", "greater-noida", "ghaziabad"]);
    let sitemap = Sitemap::for_site(&catalog, Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap());

    let locs: Vec<_> = sitemap.entries().iter().map(|e| e.loc.clone()).collect();
    assert_eq!(locs.len(), 4);
    assert_eq!(locs[0], "https://www.godavaii.com/");
    for path in cities::served_paths(&catalog) {
        let expected = format!("https://www.godavaii.com{path}");
        assert!(locs.contains(&expected), "missing {expected}");
    }
    let xml = sitemap.to_xml();
    assert_eq!(xml.matches("<url>").count(), 4);
}

#[test]
fn robots_points_at_sitemap_on_configured_host() {
    let identity = SiteCatalog::default()
        .identity
        .with_base_url("https://staging.godavaii.com")
        .unwrap();
    let text = RobotsPolicy::allow_all(&identity).to_text();
    assert!(text.contains("User-Agent: *\nAllow: /\n"));
    assert!(text.contains("Sitemap: https://staging.godavaii.com/sitemap.xml"));
    assert!(text.contains("Host: https://staging.godavaii.com"));
}

#[test]
fn city_resolution_follows_the_allow_list() {
    let catalog = catalog_with(&["noida", "ghaziabad"]);
    assert_eq!(cities::resolve(&catalog, "Ghaziabad").unwrap().name, "Ghaziabad");
    assert!(cities::resolve(&catalog, "mumbai").is_err());
}
