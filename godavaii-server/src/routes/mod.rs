use axum::{Router, handler::Handler, routing::get};
use godavaii_config::HstsLayerConfig;
use godavaii_core::routes;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{
        health::{health_handler, ping_handler},
        pages::{city_handler, home_handler, not_found_handler},
        seo::{robots_handler, sitemap_handler},
    },
    infra::app_state::AppState,
    middleware::{HstsConfig, HstsLayer},
};

/// Build the site router. Unmatched paths fall through to the public asset
/// directory, then to the HTML not-found page.
pub fn create_app(state: AppState) -> Router {
    let hsts = HstsLayer::with_config(HstsConfig::from(&HstsLayerConfig::from(
        &state.config.security,
    )));

    let assets = ServeDir::new(state.config.public_dir())
        .not_found_service(not_found_handler.with_state(state.clone()));

    Router::new()
        .route(routes::HOME, get(home_handler))
        .route(routes::city::ITEM, get(city_handler))
        .route(routes::SITEMAP, get(sitemap_handler))
        .route(routes::ROBOTS, get(robots_handler))
        .route(routes::PING, get(ping_handler))
        .route(routes::HEALTH, get(health_handler))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(hsts)
        .with_state(state)
}
