use godavaii_model::SiteIdentity;

use crate::routes;

/// Crawl policy served at `/robots.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub host: String,
    pub sitemap: String,
}

impl RobotsPolicy {
    /// Everything crawlable by everyone.
    pub fn allow_all(identity: &SiteIdentity) -> Self {
        Self {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: Vec::new(),
            host: identity.origin(),
            sitemap: identity.absolute(routes::SITEMAP),
        }
    }

    pub fn to_text(&self) -> String {
        let mut text = format!("User-Agent: {}\n", self.user_agent);
        for path in &self.allow {
            text.push_str(&format!("Allow: {path}\n"));
        }
        for path in &self.disallow {
            text.push_str(&format!("Disallow: {path}\n"));
        }
        text.push('\n');
        text.push_str(&format!("Host: {}\n", self.host));
        text.push_str(&format!("Sitemap: {}\n", self.sitemap));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_all_references_sitemap() {
        let policy = RobotsPolicy::allow_all(&SiteIdentity::godavaii());
        assert_eq!(
            policy.to_text(),
            "User-Agent: *\nAllow: /\n\nHost: https://www.godavaii.com\nSitemap: https://www.godavaii.com/sitemap.xml\n"
        );
    }
}
