use maud::{Markup, html};

use godavaii_core::routes::{self, anchors};
use godavaii_model::{City, SiteIdentity};

use super::layout;

const HIGHLIGHTS: [&str; 3] = [
    "Authentic medicines from licensed partners",
    "Average delivery time under 30 minutes",
    "Pharmacist-checked orders and safe substitutions",
];

/// Body content of `/medicine-delivery/{city}`.
pub fn content(identity: &SiteIdentity, city: &City, year: i32) -> Markup {
    html! {
        header.site-header {
            a href=(routes::HOME) {
                img src=(identity.logo_path) alt=(identity.name) width="40" height="40";
                span { (identity.name) }
            }
        }
        main.city-page {
            section {
                h1 { "Medicine Delivery in " (city.name) " \u{2013} Under 30 Minutes" }
                p {
                    (identity.name) " connects you to verified local pharmacies in " (city.name) ". "
                    "Order OTC items or upload your prescription; Schedule H/H1 medicines are "
                    "dispensed only against a valid Rx. Live tracking, secure payments, 24x7 support."
                }
                ul {
                    @for highlight in HIGHLIGHTS {
                        li { (highlight) }
                    }
                }
                p {
                    a.button href={ (routes::HOME) (anchors::DOWNLOAD) } { "Download the app" }
                    " or "
                    a.button.outline href={ (routes::HOME) (anchors::PARTNER_PHARMACY) } {
                        "Become a pharmacy partner"
                    }
                }
            }
        }
        (layout::footer(identity, year, routes::HOME))
    }
}
