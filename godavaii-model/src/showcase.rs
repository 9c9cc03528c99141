/// Width:height ratio the app screenshots are rendered at.
pub const SCREENSHOT_ASPECT_RATIO: (u32, u32) = (360, 740);

/// One frame of the app preview carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Screenshot {
    /// Path under the public asset directory, e.g. `/HOME.png`.
    pub src: String,
    pub alt: String,
}

impl Screenshot {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }
}
