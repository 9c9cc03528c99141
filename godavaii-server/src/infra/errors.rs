use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use godavaii_core::CoreError;
use tracing::error;

use crate::render;

pub type AppResult<T> = Result<T, AppError>;

/// Handler error. Rendered as a standalone HTML page since every route of the
/// site is browser facing.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        let body = render::error::page(self.status, &self.message);
        (self.status, Html(body.into_string())).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownCity(slug) => {
                Self::not_found(format!("We don't deliver in '{slug}' yet"))
            }
            CoreError::EmptyCarousel | CoreError::IndexOutOfRange { .. } => {
                Self::bad_request(err.to_string())
            }
            CoreError::ZeroAutoplayPeriod | CoreError::Serialization(_) => {
                Self::internal(err.to_string())
            }
        }
    }
}
