// src/handlers/fallback.rs

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Unknown paths.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {} {}", method, uri))
}

/// Known paths requested with an unsupported verb.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
