use maud::{DOCTYPE, Markup, PreEscaped, html};

use godavaii_core::{
    routes::anchors,
    seo::{OpenGraph, PageMetadata, TwitterCard},
};
use godavaii_model::SiteIdentity;

/// Enough CSS for the drawer and the carousels to work without scripts.
const SITE_CSS: &str = r#"
:root { --brand: #0f5b46; }
body { margin: 0; font-family: system-ui, sans-serif; color: #1f2933; }
a { color: inherit; }
.site-header { position: fixed; top: 0; inset-inline: 0; z-index: 50; display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: rgba(255,255,255,0.9); }
.site-header nav a { margin-inline: 0.5rem; text-decoration: none; }
.drawer-root { position: fixed; inset: 0; z-index: 9999; display: flex; }
.drawer-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,0.6); }
.drawer { position: fixed; right: 0; top: 0; height: 100%; width: 80%; max-width: 20rem; background: #fff; padding: 2rem 1.75rem; display: flex; flex-direction: column; }
.drawer a { padding-block: 1rem; border-bottom: 1px solid #e5e7eb; text-decoration: none; }
.screenshot-frame { position: relative; width: min(78vw, 420px); }
.screenshot-frame img { width: 100%; height: 100%; object-fit: contain; }
.dot { display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: #e5e7eb; margin: 0.25rem; }
.dot.active { background: var(--brand); }
.testimonial-viewport { overflow: hidden; }
.testimonial-track { display: flex; transition: transform 0.5s ease; }
.testimonial-track > figure { flex: 0 0 100%; margin: 0; }
section { padding: 4rem 1rem; }
"#;

/// Render a complete document.
#[must_use]
pub fn page(
    metadata: &PageMetadata,
    json_ld: &[String],
    body_style: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (metadata.title) }
                meta name="description" content=(metadata.description);
                meta name="application-name" content=(metadata.application_name);
                meta name="keywords" content=(metadata.keywords.join(", "));
                meta name="category" content=(metadata.category);
                meta name="robots" content=(metadata.robots.robots());
                meta name="googlebot" content=(metadata.robots.googlebot());
                meta name="theme-color" content=(metadata.theme_color);
                link rel="canonical" href=(metadata.canonical);
                (open_graph(&metadata.open_graph))
                (twitter_card(&metadata.twitter))
                link rel="icon" href=(metadata.icons.icon);
                link rel="shortcut icon" href=(metadata.icons.shortcut);
                link rel="apple-touch-icon" href=(metadata.icons.apple);
                style { (PreEscaped(SITE_CSS)) }
                @for document in json_ld {
                    script type="application/ld+json" { (PreEscaped(document)) }
                }
            }
            body style=[body_style] {
                (content)
            }
        }
    }
}

fn open_graph(og: &OpenGraph) -> Markup {
    html! {
        meta property="og:type" content=(og.kind);
        meta property="og:url" content=(og.url);
        meta property="og:site_name" content=(og.site_name);
        meta property="og:title" content=(og.title);
        meta property="og:description" content=(og.description);
        meta property="og:locale" content=(og.locale);
        @if let Some(image) = &og.image {
            meta property="og:image" content=(image.url);
            meta property="og:image:width" content=(image.width);
            meta property="og:image:height" content=(image.height);
            meta property="og:image:alt" content=(image.alt);
        }
    }
}

fn twitter_card(card: &TwitterCard) -> Markup {
    html! {
        meta name="twitter:card" content=(card.card);
        meta name="twitter:title" content=(card.title);
        meta name="twitter:description" content=(card.description);
        @if let Some(image) = &card.image {
            meta name="twitter:image" content=(image);
        }
    }
}

/// Footer shared by every page. `home` prefixes in-page anchors so the links
/// also work from city pages.
pub fn footer(identity: &SiteIdentity, year: i32, home: &str) -> Markup {
    html! {
        footer.site-footer {
            nav {
                a href={ (home) (anchors::TRUST) } { "Prescription Policy" }
                a href={ (home) (anchors::PARTNER_PHARMACY) } { "Partner T&Cs" }
                a href="#" { "Privacy" }
                a href="#" { "Terms" }
            }
            p { "\u{a9} " (year) " " (identity.name) ". All rights reserved." }
        }
    }
}
