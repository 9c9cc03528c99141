use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::debug;

use crate::infra::app_state::AppState;

pub async fn ping_handler() -> Json<Value> {
    debug!("ping");
    Json(json!({
        "status": "ok",
        "message": "GoDavaii site is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Missing assets degrade the page (broken images) but every route still
/// renders, so the endpoint reports `degraded` with a 200 rather than failing.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = &state.catalog;
    let public_dir = state.config.public_dir();

    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    health_status["checks"]["catalog"] = json!({
        "status": "healthy",
        "screenshots": catalog.screenshots.len(),
        "testimonials": catalog.testimonials.len(),
        "cities": catalog.cities.iter().map(|c| c.slug.as_str()).collect::<Vec<_>>(),
        "faq": catalog.faq.len(),
    });

    let public_dir_exists = public_dir.is_dir();
    let mut assets = serde_json::Map::new();
    let mut assets_present = true;
    for screenshot in &catalog.screenshots {
        let exists = public_dir
            .join(screenshot.src.trim_start_matches('/'))
            .is_file();
        assets_present &= exists;
        assets.insert(screenshot.src.clone(), Value::Bool(exists));
    }

    let assets_healthy = public_dir_exists && assets_present;
    health_status["checks"]["public_assets"] = json!({
        "status": if assets_healthy { "healthy" } else { "degraded" },
        "public_dir": public_dir.display().to_string(),
        "public_dir_exists": public_dir_exists,
        "screenshots": assets,
    });

    if !assets_healthy {
        health_status["status"] = json!("degraded");
    }

    Json(health_status)
}
