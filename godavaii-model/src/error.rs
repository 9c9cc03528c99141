use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidSlug(String),
    InvalidUrl(String),
    EmptyField(&'static str),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidSlug(slug) => {
                write!(f, "invalid city slug: {slug:?}")
            }
            ModelError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            ModelError::EmptyField(field) => {
                write!(f, "{field} must not be empty")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
