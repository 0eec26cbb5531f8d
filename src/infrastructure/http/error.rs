//! API error type shared by all routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::ErrorResponseDto;
use crate::application::services::GroomingError;
use crate::infrastructure::export::ExportError;

/// Every way a request can fail, with its HTTP mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid JSON body")]
    InvalidBody,
    #[error("Missing 'text' in request body")]
    MissingField,
    #[error("Failed to read request body")]
    Io(#[source] axum::Error),
    #[error("Failed to groom backlog")]
    Grooming(#[from] GroomingError),
    #[error("Failed to export backlog")]
    Export(#[from] ExportError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody | ApiError::MissingField => StatusCode::BAD_REQUEST,
            ApiError::Io(_) | ApiError::Grooming(_) | ApiError::Export(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Underlying error text for server-side failures
    fn details(&self) -> Option<String> {
        match self {
            ApiError::Io(e) => Some(e.to_string()),
            ApiError::Grooming(e) => Some(e.to_string()),
            ApiError::Export(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponseDto {
            error: self.to_string(),
            details: self.details(),
        };
        (self.status(), Json(body)).into_response()
    }
}
