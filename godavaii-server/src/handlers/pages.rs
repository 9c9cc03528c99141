use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Html,
};
use serde::Deserialize;
use tracing::debug;

use godavaii_core::{
    cities,
    seo::{PageMetadata, structured_data, to_json_ld},
    ui::{
        CarouselState, DisplayDateFormatter, DocumentScroll, NavEvent,
        NavigationMenuController, ScreenshotCarousel,
    },
};

use crate::{
    infra::{
        app_state::AppState,
        errors::{AppError, AppResult},
    },
    render::{self, home::HomeView},
};

/// View-state carried in the landing page URL.
///
/// Values are kept as raw strings: anything that is not a valid index falls
/// back to the first item instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub shot: Option<String>,
    pub slide: Option<String>,
    pub menu: Option<String>,
}

fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse().ok())
}

pub async fn home_handler(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> AppResult<Html<String>> {
    let catalog = &state.catalog;
    let identity = &catalog.identity;

    let mut screenshots = ScreenshotCarousel::new(&catalog.screenshots)?;
    if let Some(index) = parse_index(query.shot.as_deref())
        && let Err(err) = screenshots.try_jump_to(index)
    {
        debug!(%err, "ignoring screenshot index");
    }

    // Rendering needs the position only; no autoplay timer is spawned per request.
    let mut slides = CarouselState::new(catalog.testimonials.len())?;
    if let Some(index) = parse_index(query.slide.as_deref())
        && let Err(err) = slides.try_jump_to(index)
    {
        debug!(%err, "ignoring testimonial index");
    }

    let scroll = DocumentScroll::new();
    let mut nav = NavigationMenuController::with_swipe_threshold(
        scroll.clone(),
        state.config.ui.swipe_close_threshold_px,
    );
    if query.menu.as_deref() == Some("open") {
        nav.update(NavEvent::Open);
    }
    let body_style = scroll.body_style();

    let display_date = DisplayDateFormatter::capture(state.clock.as_ref());

    let metadata = PageMetadata::home(identity);
    let json_ld = vec![
        to_json_ld(&structured_data::organization(identity))?,
        to_json_ld(&structured_data::website(identity))?,
        to_json_ld(&structured_data::faq_page(&catalog.faq))?,
    ];

    let view = HomeView {
        catalog,
        screenshots: &screenshots,
        testimonials: slides,
        autoplay_period_ms: u64::try_from(
            state.config.ui.autoplay_period.as_millis(),
        )
        .unwrap_or(u64::MAX),
        menu_open: nav.is_open(),
        display_date: &display_date,
    };
    let markup = render::page(
        &metadata,
        &json_ld,
        body_style,
        render::home::content(&view),
    );
    Ok(Html(markup.into_string()))
}

pub async fn city_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Html<String>> {
    let catalog = &state.catalog;
    let identity = &catalog.identity;
    let city = cities::resolve(catalog, &raw)?;

    let metadata = PageMetadata::city(identity, city);
    let json_ld = vec![
        to_json_ld(&structured_data::organization(identity))?,
        to_json_ld(&structured_data::website(identity))?,
        to_json_ld(&structured_data::city_service(identity, city))?,
    ];
    let year = DisplayDateFormatter::capture(state.clock.as_ref()).year();

    let markup = render::page(
        &metadata,
        &json_ld,
        None,
        render::city::content(identity, city, year),
    );
    Ok(Html(markup.into_string()))
}

/// Requests that matched no route and no file under the public directory.
pub async fn not_found_handler(uri: Uri) -> AppError {
    debug!(path = %uri.path(), "no route or asset");
    AppError::not_found(format!("Nothing lives at {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_parsing_is_lenient() {
        assert_eq!(parse_index(Some("2")), Some(2));
        assert_eq!(parse_index(Some(" 1 ")), Some(1));
        assert_eq!(parse_index(Some("-1")), None);
        assert_eq!(parse_index(Some("two")), None);
        assert_eq!(parse_index(None), None);
    }
}
