use std::fmt;

use crate::error::{ModelError, Result};

/// Normalized route key for a city page (`/medicine-delivery/{slug}`).
///
/// Slugs are lower-case ASCII letters, digits and single interior hyphens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CitySlug(String);

impl CitySlug {
    /// Parse a slug from untrusted input. Surrounding whitespace is trimmed
    /// and the value is lower-cased before validation.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let normalized = raw.as_ref().trim().to_ascii_lowercase();
        let valid = !normalized.is_empty()
            && !normalized.starts_with('-')
            && !normalized.ends_with('-')
            && !normalized.contains("--")
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if valid {
            Ok(Self(normalized))
        } else {
            Err(ModelError::InvalidSlug(raw.as_ref().to_string()))
        }
    }

    /// Slug for a built-in city. The value must already be normalized.
    pub(crate) fn from_static(slug: &'static str) -> Self {
        debug_assert!(Self::parse(slug).is_ok_and(|parsed| parsed.0 == slug));
        Self(slug.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name derived from the slug: hyphens become spaces and
    /// every word is capitalized (`greater-noida` -> `Greater Noida`).
    pub fn titleized(&self) -> String {
        titleize(&self.0)
    }
}

impl fmt::Display for CitySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CitySlug {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<CitySlug> for String {
    fn from(value: CitySlug) -> Self {
        value.0
    }
}

/// A city with its own landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub name: String,
    pub slug: CitySlug,
}

impl City {
    pub fn new(name: impl Into<String>, slug: CitySlug) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyField("city name"));
        }
        Ok(Self { name, slug })
    }

    /// Build a city whose display name is derived from the slug.
    pub fn from_slug(slug: CitySlug) -> Self {
        Self {
            name: slug.titleized(),
            slug,
        }
    }
}

pub fn titleize(raw: &str) -> String {
    let spaced = raw.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_alphanumeric() || c == '_' {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
