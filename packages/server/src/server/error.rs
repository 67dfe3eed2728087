//! Error -> HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::video::VideoError;

/// Body of every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl VideoError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            VideoError::MissingInput | VideoError::UnrecognizedUrl => StatusCode::BAD_REQUEST,
            VideoError::NoDirectUrl => StatusCode::NOT_FOUND,
            VideoError::ExtractionFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for VideoError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
