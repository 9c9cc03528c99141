//! Per-page `<head>` metadata.
//!
//! Titles go through the site template (`%s | GoDavaii`). A title that
//! already ends with the suffix is used as is.

use godavaii_model::{City, SiteIdentity};

use crate::routes;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const HOME_TITLE: &str = "Medicine Delivery in Under 30 Minutes";
const HOME_DESCRIPTION: &str = "Order medicines from verified local pharmacies with GoDavaii. Fast hyperlocal delivery (under 30 minutes), real-time tracking and 24x7 support.";
const SHARE_TITLE: &str = "Medicine delivery in under 30 minutes";
const SHARE_DESCRIPTION: &str =
    "Order from verified local pharmacies. Real-time tracking. 24x7 support.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
    /// Emit the extended googlebot preview directives.
    pub rich_previews: bool,
}

impl RobotsDirectives {
    pub const INDEX_ALL: Self = Self {
        index: true,
        follow: true,
        rich_previews: true,
    };

    pub const NO_INDEX: Self = Self {
        index: false,
        follow: true,
        rich_previews: false,
    };

    /// Value of `<meta name="robots">`.
    pub fn robots(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index}, {follow}")
    }

    /// Value of `<meta name="googlebot">`.
    pub fn googlebot(&self) -> String {
        let mut value = self.robots();
        if self.rich_previews {
            value.push_str(
                ", max-video-preview:-1, max-image-preview:large, max-snippet:-1",
            );
        }
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub kind: &'static str,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub image: Option<OgImage>,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    pub icon: &'static str,
    pub shortcut: &'static str,
    pub apple: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            icon: "/favicon.ico",
            shortcut: "/favicon-16x16.png",
            apple: "/apple-touch-icon.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub application_name: String,
    pub keywords: Vec<String>,
    pub category: &'static str,
    /// Absolute canonical URL.
    pub canonical: String,
    pub robots: RobotsDirectives,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub theme_color: String,
    pub icons: Icons,
}

impl PageMetadata {
    pub fn home(identity: &SiteIdentity) -> Self {
        let share_title = format!("{} \u{2013} {SHARE_TITLE}", identity.name);
        let og_image = identity.absolute(&identity.og_image_path);
        Self {
            title: apply_title_template(identity, HOME_TITLE),
            description: HOME_DESCRIPTION.to_string(),
            canonical: identity.absolute(routes::HOME),
            open_graph: OpenGraph {
                kind: "website",
                url: identity.origin(),
                site_name: identity.name.clone(),
                title: share_title.clone(),
                description: format!("{SHARE_DESCRIPTION} {}.", identity.name),
                image: Some(OgImage {
                    url: og_image.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: identity.name.clone(),
                }),
                locale: identity.locale.clone(),
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: share_title,
                description: SHARE_DESCRIPTION.to_string(),
                image: Some(og_image),
            },
            ..Self::base(identity)
        }
    }

    pub fn city(identity: &SiteIdentity, city: &City) -> Self {
        let title = apply_title_template(
            identity,
            &format!("Medicine Delivery in {} (Under 30 Minutes)", city.name),
        );
        let description = format!(
            "Order authentic medicines fast in {}. Hyperlocal delivery in under 30 minutes from licensed pharmacies with live tracking and 24x7 support.",
            city.name
        );
        let canonical =
            identity.absolute(&routes::utils::city_path(city.slug.as_str()));
        Self {
            open_graph: OpenGraph {
                kind: "website",
                url: canonical.clone(),
                site_name: identity.name.clone(),
                title: title.clone(),
                description: description.clone(),
                image: None,
                locale: identity.locale.clone(),
            },
            twitter: TwitterCard {
                card: "summary",
                title: title.clone(),
                description: description.clone(),
                image: None,
            },
            title,
            description,
            canonical,
            ..Self::base(identity)
        }
    }

    fn base(identity: &SiteIdentity) -> Self {
        Self {
            title: format!(
                "{} \u{2013} India\u{2019}s fastest hyperlocal medicine delivery (under 30 minutes)",
                identity.name
            ),
            description: format!(
                "{} delivers medicines from trusted local pharmacies in under 30 minutes with real-time tracking and 24x7 support.",
                identity.name
            ),
            application_name: identity.name.clone(),
            keywords: identity.keywords.clone(),
            category: "Health",
            canonical: identity.absolute(routes::HOME),
            robots: RobotsDirectives::INDEX_ALL,
            open_graph: OpenGraph {
                kind: "website",
                url: identity.origin(),
                site_name: identity.name.clone(),
                title: identity.name.clone(),
                description: String::new(),
                image: None,
                locale: identity.locale.clone(),
            },
            twitter: TwitterCard {
                card: "summary",
                title: identity.name.clone(),
                description: String::new(),
                image: None,
            },
            theme_color: identity.theme_color.clone(),
            icons: Icons::default(),
        }
    }
}

pub fn apply_title_template(identity: &SiteIdentity, title: &str) -> String {
    let suffix = format!(" | {}", identity.name);
    if title.ends_with(&suffix) {
        title.to_string()
    } else {
        format!("{title}{suffix}")
    }
}
