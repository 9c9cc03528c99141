use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("carousel needs at least one item")]
    EmptyCarousel,

    #[error("index {index} is out of range for {item_count} items")]
    IndexOutOfRange { index: usize, item_count: usize },

    #[error("autoplay period must be non-zero")]
    ZeroAutoplayPeriod,

    #[error("city not served: {0}")]
    UnknownCity(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
