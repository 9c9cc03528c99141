//! Route definitions shared by the server and its tests.

pub const HOME: &str = "/";
pub const PING: &str = "/ping";
pub const HEALTH: &str = "/health";
pub const SITEMAP: &str = "/sitemap.xml";
pub const ROBOTS: &str = "/robots.txt";

pub mod city {
    pub const PREFIX: &str = "/medicine-delivery";
    pub const ITEM: &str = "/medicine-delivery/{city}";
    pub const PARAM: &str = "{city}";
}

/// In-page section anchors of the landing page.
pub mod anchors {
    pub const FEATURES: &str = "#features";
    pub const HOW_IT_WORKS: &str = "#how-it-works";
    pub const TRUST: &str = "#trust";
    pub const APP_PREVIEW: &str = "#app-preview";
    pub const PARTNER_PHARMACY: &str = "#partner-pharmacy";
    pub const PARTNER_DELIVERY: &str = "#partner-delivery";
    pub const TESTIMONIALS: &str = "#testimonials";
    pub const COVERAGE: &str = "#coverage";
    pub const DOWNLOAD: &str = "#download";
    pub const ABOUT: &str = "#about";
    pub const FAQ: &str = "#faq";
    pub const CONTACT: &str = "#contact";
}

pub mod utils {
    use super::city;

    /// Replace a single path parameter (e.g. `"{city}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    /// Site-relative path of a city page.
    pub fn city_path(slug: impl AsRef<str>) -> String {
        replace_param(city::ITEM, city::PARAM, slug)
    }

    /// Append query parameters to the provided route. Values are expected to
    /// be URL-safe already (indices and fixed keywords).
    pub fn with_query(route: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return route.to_string();
        }

        let mut path =
            String::with_capacity(route.len() + 1 + params.len() * 8);
        path.push_str(route);
        path.push('?');
        for (idx, (key, value)) in params.iter().enumerate() {
            if idx > 0 {
                path.push('&');
            }
            path.push_str(key);
            path.push('=');
            path.push_str(value);
        }
        path
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn city_path_substitutes_slug() {
            assert_eq!(city_path("noida"), "/medicine-delivery/noida");
        }

        #[test]
        fn with_query_joins_pairs() {
            assert_eq!(with_query("/", &[]), "/");
            assert_eq!(
                with_query("/", &[("shot", "2"), ("slide", "0")]),
                "/?shot=2&slide=0"
            );
        }
    }
}
