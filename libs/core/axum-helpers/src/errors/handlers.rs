use axum::{http::StatusCode, response::Response};

use super::{AppError, ErrorCode, error_response};

/// Fallback for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message().to_string(),
        ErrorCode::MethodNotAllowed,
    )
}
