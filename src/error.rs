//! Error types for the parsing and HTTP edges.
//!
//! The categorization engine itself is total and never returns an error;
//! these types only cover label parsing and request validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryParseError {
    #[error("unknown category `{0}`")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Category(#[from] CategoryParseError),

    #[error("batch of {got} items exceeds the limit of {max}")]
    BatchTooLarge { got: usize, max: usize },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Category(_) | ApiError::BatchTooLarge { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request rejected");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
