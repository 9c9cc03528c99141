use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use godavaii_core::{routes, seo::RobotsDirectives};

/// Standalone error document. Rendered without site state, so it carries no
/// canonical URL or structured data.
pub fn page(status: StatusCode, message: &str) -> Markup {
    let heading = match status {
        StatusCode::NOT_FOUND => "Page not found",
        _ => status.canonical_reason().unwrap_or("Something went wrong"),
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="robots" content=(RobotsDirectives::NO_INDEX.robots());
                title { (heading) " | GoDavaii" }
            }
            body {
                main.error-page {
                    h1 { (heading) }
                    p { (message) }
                    p { a href=(routes::HOME) { "Back to GoDavaii" } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_page_is_noindex_and_escaped() {
        let html = page(StatusCode::NOT_FOUND, "<script>x</script>").into_string();
        assert!(html.contains("<title>Page not found | GoDavaii</title>"));
        assert!(html.contains(r#"content="noindex, follow""#));
        assert!(html.contains("&lt;script&gt;"));
    }
}
