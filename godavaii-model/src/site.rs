use url::Url;

use crate::error::{ModelError, Result};

/// Brand identity used by page metadata and structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub name: String,
    pub base_url: Url,
    pub support_email: String,
    pub logo_path: String,
    pub og_image_path: String,
    pub theme_color: String,
    pub locale: String,
    pub area_served: String,
    pub languages: Vec<String>,
    pub keywords: Vec<String>,
}

impl SiteIdentity {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.godavaii.com";

    pub fn godavaii() -> Self {
        Self {
            name: "GoDavaii".to_string(),
            base_url: Url::parse(Self::DEFAULT_BASE_URL)
                .expect("default base url is a valid absolute url"),
            support_email: "info@godavaii.com".to_string(),
            logo_path: "/LOGO.png".to_string(),
            og_image_path: "/og-image.png".to_string(),
            theme_color: "#156b56".to_string(),
            locale: "en_IN".to_string(),
            area_served: "IN".to_string(),
            languages: vec!["en".to_string(), "hi".to_string()],
            keywords: [
                "GoDavaii",
                "medicine delivery",
                "pharmacy delivery",
                "prescription delivery",
                "meds near me",
                "hyperlocal delivery",
                "24x7 pharmacy",
                "India",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }

    /// Replace the base URL, e.g. for a staging deployment.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    /// Absolute URL for a site-relative path. The base never carries a
    /// trailing slash, so `absolute("/")` is `https://host/`.
    pub fn absolute(&self, path: &str) -> String {
        let origin = self.origin();
        if path.starts_with('/') {
            format!("{origin}{path}")
        } else {
            format!("{origin}/{path}")
        }
    }

    /// Scheme, host and optional port without a trailing slash.
    pub fn origin(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }

    pub fn logo_url(&self) -> String {
        self.absolute(&self.logo_path)
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|err| ModelError::InvalidUrl(format!("{raw}: {err}")))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ModelError::InvalidUrl(format!(
                "{raw}: unsupported scheme {other}"
            )));
        }
    }
    if url.host_str().is_none() {
        return Err(ModelError::InvalidUrl(format!("{raw}: missing host")));
    }
    Ok(url)
}
