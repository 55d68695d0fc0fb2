//! HTML error responses for catalog handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::DomainError;
use crate::views;

/// Handler-level error, rendered as an HTML error page
#[derive(Debug)]
pub enum ApiError {
    /// Missing row or unknown route; carries the message shown to the user
    NotFound(&'static str),
    Internal(String),
}

pub type ApiResult = Result<Response, ApiError>;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => ApiError::NotFound("Resource not found"),
            DomainError::Database(msg) => ApiError::Internal(format!("Database error: {}", msg)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                views::error_page("Not Found", message),
            )
                .into_response(),
            ApiError::Internal(message) => {
                tracing::error!("Request failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::error_page(
                        "Internal Server Error",
                        "Something went wrong while handling this request.",
                    ),
                )
                    .into_response()
            }
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Page not found")
}
