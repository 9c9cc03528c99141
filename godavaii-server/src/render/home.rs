//! The landing page.
//!
//! Interactive pieces are rendered from their current state. Every control is
//! a plain link back to `/` carrying the state it would move to, so the page
//! is fully usable without scripts: `shot` selects a screenshot, `slide` a
//! testimonial and `menu=open` opens the mobile drawer.

use maud::{Markup, html};

use godavaii_core::{
    routes::{self, anchors},
    ui::{CarouselState, DisplayDate, ScreenshotCarousel},
};
use godavaii_model::{SCREENSHOT_ASPECT_RATIO, SiteCatalog};

use super::layout;

const NAV_LINKS: [(&str, &str); 7] = [
    ("Features", anchors::FEATURES),
    ("How it works", anchors::HOW_IT_WORKS),
    ("App Preview", anchors::APP_PREVIEW),
    ("Partners", anchors::PARTNER_PHARMACY),
    ("Download", anchors::DOWNLOAD),
    ("About", anchors::ABOUT),
    ("Contact", anchors::CONTACT),
];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "\u{23f1}\u{fe0f}",
        "Ultra-fast Delivery",
        "Get medicines at your doorstep in under 30 minutes, always!",
    ),
    (
        "\u{1f3ea}",
        "Local Pharmacy Network",
        "Support local businesses & always get authentic medicines from trusted stores near you.",
    ),
    (
        "\u{1f514}",
        "Live Order Tracking",
        "Track your order live, get notified at every step. Total transparency.",
    ),
];

const STEPS: [(&str, &str, &str); 4] = [
    ("\u{1f4f8}", "Upload Rx", "Add your prescription or search OTC items."),
    ("\u{1f6d2}", "Place Order", "Nearby licensed pharmacy accepts & prepares."),
    (
        "\u{1f6f5}",
        "Instant Delivery",
        "Rider picks up & delivers in under 30 minutes.",
    ),
    ("\u{2705}", "Safe & Verified", "Pharmacist checked. Secure digital receipts."),
];

const TRUST: [(&str, &str); 3] = [
    (
        "Prescription Policy",
        "Schedule H/H1 medicines are dispensed only against a valid prescription.",
    ),
    (
        "Verified Pharmacies",
        "Partners are licensed; orders are pharmacist-checked before dispatch.",
    ),
    (
        "Privacy & Data",
        "We store data securely and follow least-access principles for PHI.",
    ),
];

const PHARMACY_BENEFITS: [(&str, &str); 6] = [
    ("More Orders:", "Reach customers nearby with zero marketing effort."),
    ("Fast Payouts:", "Quick settlements with transparent GST invoices."),
    ("Simple Tools:", "Web dashboard, order alerts, item substitutions."),
    ("Control:", "Set timings, stock, delivery radius & holidays."),
    (
        "Compliance:",
        "Valid Rx required for Schedule H/H1; licensed partners only.",
    ),
    ("Support:", "Assisted onboarding & priority chat support."),
];

const DELIVERY_CARDS: [(&str, [&str; 3]); 3] = [
    (
        "Why it\u{2019}s great",
        ["Transparent earnings", "Peak-hour boosts", "In-app support"],
    ),
    (
        "Requirements",
        [
            "Valid DL & bike/scooter",
            "Aadhar/PAN & bank account",
            "Android/iOS smartphone",
        ],
    ),
    (
        "Safety & Support",
        [
            "In-app navigation & safe-delivery training",
            "Help center & escalation hotline",
            "Contactless options when needed",
        ],
    ),
];

const COVERAGE_PERKS: [(&str, &str); 3] = [
    ("\u{2b50} Priority placement", "Founding partner badge at launch"),
    ("\u{26a1} Fast payouts", "Transparent GST invoices"),
    ("\u{1f6e1}\u{fe0f} Compliance-first", "Valid Rx & licensed partners only"),
];

const DIFFERENTIATORS: [(&str, &str); 4] = [
    ("Hyperlocal Speed:", "Record-time deliveries, 24x7."),
    ("Real Pharmacy Partners:", "Licensed, trusted pharmacists."),
    ("Smart Tracking:", "Live updates at every step."),
    ("Zero Compromises:", "Authentic stock. Reliable support."),
];

const GOOGLE_PLAY_BADGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/7/78/Google_Play_Store_badge_EN.svg";
const APP_STORE_BADGE: &str =
    "https://developer.apple.com/assets/elements/badges/download-on-the-app-store.svg";

/// Everything the landing page renders from, captured once per page view.
#[derive(Debug)]
pub struct HomeView<'a> {
    pub catalog: &'a SiteCatalog,
    pub screenshots: &'a ScreenshotCarousel<'a>,
    pub testimonials: CarouselState,
    pub autoplay_period_ms: u64,
    pub menu_open: bool,
    pub display_date: &'a DisplayDate,
}

impl HomeView<'_> {
    fn shot(&self) -> usize {
        self.screenshots.current_index()
    }

    fn slide(&self) -> usize {
        self.testimonials.current_index()
    }
}

/// Link back to the home page with the given carousel positions.
fn home_href(shot: usize, slide: usize, menu_open: bool, anchor: &str) -> String {
    let shot = shot.to_string();
    let slide = slide.to_string();
    let mut params = vec![("shot", shot.as_str()), ("slide", slide.as_str())];
    if menu_open {
        params.push(("menu", "open"));
    }
    let mut href = routes::utils::with_query(routes::HOME, &params);
    href.push_str(anchor);
    href
}

/// Body content of the landing page.
pub fn content(view: &HomeView<'_>) -> Markup {
    html! {
        (header(view))
        @if view.menu_open {
            (drawer(view))
        }
        main {
            (hero())
            (stats(view))
            (features())
            (how_it_works())
            (trust())
            (app_preview(view))
            (partner_pharmacy())
            (partner_delivery())
            (testimonials(view))
            (coverage(view))
            (download())
            (about())
            (faq(view))
            (contact(view))
        }
        (layout::footer(&view.catalog.identity, view.display_date.year(), ""))
    }
}

fn header(view: &HomeView<'_>) -> Markup {
    let identity = &view.catalog.identity;
    html! {
        header.site-header {
            a href=(routes::HOME) {
                img src=(identity.logo_path) alt=(identity.name) width="40" height="40";
                span { (identity.name) }
            }
            nav.desktop-nav {
                @for (label, anchor) in NAV_LINKS {
                    a href=(anchor) { (label) }
                }
                a.button href=(anchors::DOWNLOAD) { "Get App" }
            }
            a.hamburger
                href=(home_href(view.shot(), view.slide(), !view.menu_open, ""))
                aria-label="Toggle navigation"
                aria-expanded=(view.menu_open) { "\u{2630}" }
        }
    }
}

/// Mobile drawer. Every way out (close button, backdrop, any link) drops the
/// `menu` parameter.
fn drawer(view: &HomeView<'_>) -> Markup {
    let close = home_href(view.shot(), view.slide(), false, "");
    html! {
        div.drawer-root {
            a.drawer-backdrop href=(close) aria-hidden="true" {}
            div.drawer id="mobile-nav" {
                a.drawer-close href=(close) aria-label="Close navigation" { "\u{d7}" }
                nav {
                    @for (label, anchor) in NAV_LINKS {
                        a href=(home_href(view.shot(), view.slide(), false, anchor)) { (label) }
                    }
                    a.button href=(home_href(view.shot(), view.slide(), false, anchors::DOWNLOAD)) {
                        "Get App"
                    }
                }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section.hero {
            h1 { "Get Medicines Delivered Under 30 Minutes" }
            p {
                "India\u{2019}s fastest hyperlocal medicine delivery."
                br;
                "Real-time tracking. Trusted local pharmacies. "
                strong { "24x7" }
                " support."
            }
            a.button href=(anchors::DOWNLOAD) { "Download App" }
            a.button.outline href=(anchors::PARTNER_PHARMACY) { "Partner With Us" }
        }
    }
}

fn stats(view: &HomeView<'_>) -> Markup {
    let metrics = &view.catalog.metrics;
    html! {
        section.stats {
            div.stat {
                strong { (metrics.orders_label()) }
                span { "Orders Delivered" }
            }
            div.stat {
                strong { (metrics.partner_pharmacies_label()) }
                span { "Partner Pharmacies" }
            }
            div.stat {
                strong { (metrics.avg_delivery_label()) }
                span { "Avg Delivery Time" }
            }
            p.status-line {
                "Status: " (metrics.status_note) " \u{2022} As of " (view.display_date.text())
            }
        }
    }
}

fn features() -> Markup {
    html! {
        section id="features" {
            h2 { "Why GoDavaii?" }
            @for (icon, title, body) in FEATURES {
                article.card {
                    span.icon { (icon) }
                    h3 { (title) }
                    p { (body) }
                }
            }
        }
    }
}

fn how_it_works() -> Markup {
    html! {
        section id="how-it-works" {
            h2 { "How it works" }
            @for (icon, title, body) in STEPS {
                article.card {
                    span.icon { (icon) }
                    h3 { (title) }
                    p { (body) }
                }
            }
        }
    }
}

fn trust() -> Markup {
    html! {
        section id="trust" {
            h2 { "Trust & Compliance" }
            @for (title, body) in TRUST {
                article.card {
                    h3 { (title) }
                    p { (body) }
                }
            }
            p {
                "Our Promise: Authentic medicines only \u{2022} Verified pharmacy partners \u{2022} "
                "Pharmacist-checked orders \u{2022} Secure payments \u{2022} "
                "Privacy-first handling of health data."
            }
        }
    }
}

fn app_preview(view: &HomeView<'_>) -> Markup {
    let carousel = view.screenshots;
    let state = carousel.state();
    let current = carousel.current();
    let (width, height) = SCREENSHOT_ASPECT_RATIO;
    let slide = view.slide();
    html! {
        section id="app-preview" {
            h2 { "See GoDavaii in Action" }
            div.carousel data-index=(state.current_index()) {
                a.carousel-prev
                    href=(home_href(state.peek_previous(), slide, false, anchors::APP_PREVIEW))
                    aria-label="Previous Screenshot" { "\u{25c0}" }
                div.screenshot-frame style={ "aspect-ratio: " (width) " / " (height) } {
                    img src=(current.src) alt=(current.alt)
                        sizes="(max-width: 768px) 78vw, 420px";
                }
                a.carousel-next
                    href=(home_href(state.peek_next(), slide, false, anchors::APP_PREVIEW))
                    aria-label="Next Screenshot" { "\u{25b6}" }
            }
            div.dots {
                @for (idx, active) in state.indicators() {
                    a.dot.active[active]
                        href=(home_href(idx, slide, false, anchors::APP_PREVIEW))
                        aria-label={ "Go to screenshot " (idx + 1) }
                        aria-current=[active.then_some("true")] {}
                }
            }
        }
    }
}

fn partner_pharmacy() -> Markup {
    html! {
        section id="partner-pharmacy" {
            h2 { "Partner with GoDavaii" }
            p {
                "Grow online orders without hiring extra staff. We bring you verified prescriptions, "
                "smart batching and " strong { "under-30-min" } " delivery\u{2014}so you sell more, faster."
            }
            ul {
                @for (label, body) in PHARMACY_BENEFITS {
                    li { "\u{2705} " strong { (label) } " " (body) }
                }
            }
            a.button href=(anchors::CONTACT) { "Become a Pharmacy Partner" }
            a.button.outline href=(anchors::FAQ) { "Learn More" }
            article.card {
                h3 { "What You Get" }
                ul {
                    li { "Online storefront + discovery in your neighborhood" }
                    li { "Delivery fleet included (no extra contracts)" }
                    li { "Seamless payments with digital receipts" }
                    li { "Expiry/alternatives handling to reduce cancellations" }
                }
            }
            article.card {
                h3 { "Onboarding (3 steps)" }
                ol {
                    li { "Share drug license, GST & basic store details" }
                    li { "Inventory & hours setup (we help)" }
                    li { "Go live\u{2014}start receiving orders" }
                }
            }
        }
    }
}

fn partner_delivery() -> Markup {
    html! {
        section id="partner-delivery" {
            h2 { "Become a Delivery Partner" }
            p { "Flexible hours, guaranteed slots, and per-order incentives. Deliver health, earn more." }
            @for (title, items) in DELIVERY_CARDS {
                article.card {
                    h3 { (title) }
                    ul {
                        @for item in items {
                            li { (item) }
                        }
                    }
                }
            }
            a.button href=(anchors::CONTACT) { "Apply as Delivery Partner" }
        }
    }
}

/// Renders the requested slide. `data-autoplay-ms` is reserved for a client
/// script that ticks the track; this crate ships none, so without one the
/// dots are the only way to move.
fn testimonials(view: &HomeView<'_>) -> Markup {
    let state = view.testimonials;
    let items = &view.catalog.testimonials;
    let shot = view.shot();
    html! {
        section id="testimonials" {
            h2 { "Loved by customers" }
            div.testimonial-viewport data-autoplay-ms=(view.autoplay_period_ms) {
                div.testimonial-track
                    style={ "transform: translateX(-" (state.translate_x_percent()) "%)" } {
                    @for testimonial in items {
                        figure {
                            blockquote { "\u{201c}" (testimonial.quote) "\u{201d}" }
                            figcaption { "\u{2014} " (testimonial.author) }
                        }
                    }
                }
            }
            div.dots {
                @for (idx, active) in state.indicators() {
                    a.dot.active[active]
                        href=(home_href(shot, idx, false, anchors::TESTIMONIALS))
                        aria-label={ "Go to testimonial " (idx + 1) }
                        aria-current=[active.then_some("true")] {}
                }
            }
        }
    }
}

fn coverage(view: &HomeView<'_>) -> Markup {
    let launch_city = view.catalog.cities.first();
    html! {
        section id="coverage" {
            p {
                "Building a pharmacy-first network with "
                strong { "priority onboarding" }
            }
            span.badge { "Phase 1" }
            span.badge { "Onboarding now" }
            @if let Some(city) = launch_city {
                h2 { "We\u{2019}re launching in " span { (city.name) } }
                p {
                    "If you run a licensed pharmacy in " (city.name) ", join our founding cohort for "
                    "zero listing fees during launch, priority placement and fast payouts."
                }
            }
            div.city-chips {
                @for city in &view.catalog.cities {
                    a.chip href=(routes::utils::city_path(city.slug.as_str())) { (city.name) }
                }
            }
            a.button href=(anchors::CONTACT) { "Request onboarding" }
            @if let Some(city) = launch_city {
                a.button.outline href=(routes::utils::city_path(city.slug.as_str())) { "Learn more" }
            }
            @for (title, sub) in COVERAGE_PERKS {
                div.perk {
                    strong { (title) }
                    span { (sub) }
                }
            }
        }
    }
}

fn download() -> Markup {
    html! {
        section id="download" {
            h2 { "Download GoDavaii App" }
            p { "Start your journey to faster, easier medicine delivery." }
            a href="#" { img src=(GOOGLE_PLAY_BADGE) alt="Google Play" height="56"; }
            a href="#" { img src=(APP_STORE_BADGE) alt="App Store" height="56"; }
        }
    }
}

fn about() -> Markup {
    html! {
        section id="about" {
            h2 { "About GoDavaii" }
            p {
                "GoDavaii is on a mission to revolutionize healthcare accessibility by empowering "
                "local pharmacies with technology. Whether it's midnight or a busy day, get what you "
                "need, when you need it\u{2014}delivered quickly and securely."
            }
            h3 { "What makes us different?" }
            ul {
                @for (label, body) in DIFFERENTIATORS {
                    li { strong { (label) } " " (body) }
                }
            }
            p.compliance {
                "Compliance: \u{201c}GoDavaii facilitates delivery from licensed pharmacies. "
                "Prescription medicines are dispensed only against a valid prescription.\u{201d}"
            }
        }
    }
}

fn faq(view: &HomeView<'_>) -> Markup {
    html! {
        section id="faq" {
            h2 { "Frequently Asked Questions" }
            @for entry in &view.catalog.faq {
                details {
                    summary { (entry.question) }
                    p { (entry.answer) }
                }
            }
        }
    }
}

fn contact(view: &HomeView<'_>) -> Markup {
    let email = &view.catalog.identity.support_email;
    html! {
        section id="contact" {
            h2 { "Contact Us" }
            form {
                input type="text" name="name" placeholder="Your Name";
                input type="email" name="email" placeholder="Your Email";
                textarea name="message" placeholder="Your Message" {}
                button type="button" { "Send Message" }
            }
            p {
                "Or email us at "
                a href={ "mailto:" (email) } { (email) }
            }
        }
    }
}
