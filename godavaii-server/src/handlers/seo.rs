use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

use godavaii_core::seo::{RobotsPolicy, Sitemap};

use crate::infra::app_state::AppState;

/// `lastmod` is the time of the request, so crawlers always see a fresh
/// timestamp.
pub async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let sitemap = Sitemap::for_site(&state.catalog, Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap.to_xml(),
    )
}

pub async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    let policy = RobotsPolicy::allow_all(&state.catalog.identity);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        policy.to_text(),
    )
}
