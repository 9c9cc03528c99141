//! City page resolution against the served allow-list.

use godavaii_model::{City, CitySlug, SiteCatalog};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Resolve a raw route parameter to a served city.
///
/// The parameter is normalized (trimmed, lower-cased) before lookup. Anything
/// that is not a well-formed slug or not on the allow-list is
/// [`CoreError::UnknownCity`].
pub fn resolve<'a>(catalog: &'a SiteCatalog, raw: &str) -> Result<&'a City> {
    let slug = CitySlug::parse(raw)
        .map_err(|_| CoreError::UnknownCity(raw.to_string()))?;
    match catalog.city(&slug) {
        Some(city) => Ok(city),
        None => {
            debug!(slug = %slug, "city not on the allow-list");
            Err(CoreError::UnknownCity(slug.to_string()))
        }
    }
}

/// Site-relative paths of every served city page, in allow-list order.
pub fn served_paths(catalog: &SiteCatalog) -> Vec<String> {
    catalog
        .cities
        .iter()
        .map(|city| crate::routes::utils::city_path(city.slug.as_str()))
        .collect()
}
