//! XML sitemap (sitemaps.org 0.9).

use std::fmt::{self, Write as _};

use chrono::{DateTime, SecondsFormat, Utc};
use godavaii_model::SiteCatalog;

use crate::{cities, routes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    pub const HOME_PRIORITY: f32 = 1.0;
    pub const CITY_PRIORITY: f32 = 0.9;

    /// Home page first, then every served city in allow-list order. All
    /// entries share the same `lastmod`.
    pub fn for_site(catalog: &SiteCatalog, generated_at: DateTime<Utc>) -> Self {
        let identity = &catalog.identity;
        let mut entries = Vec::with_capacity(catalog.cities.len() + 1);
        entries.push(SitemapEntry {
            loc: identity.absolute(routes::HOME),
            last_modified: generated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: Self::HOME_PRIORITY,
        });
        entries.extend(cities::served_paths(catalog).into_iter().map(|path| {
            SitemapEntry {
                loc: identity.absolute(&path),
                last_modified: generated_at,
                change_frequency: ChangeFrequency::Weekly,
                priority: Self::CITY_PRIORITY,
            }
        }));
        Self { entries }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.entries.len() * 192);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
        );
        xml.push('\n');
        for entry in &self.entries {
            // Writing into a String cannot fail.
            let _ = write!(
                xml,
                "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{}</priority>\n</url>\n",
                escape_xml(&entry.loc),
                entry
                    .last_modified
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                entry.change_frequency,
                entry.priority,
            );
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
