use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::users::store::DataAccessError;

pub const NOT_FOUND_BODY: &str = "User not found";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";
pub const ORIGIN_REJECTED_BODY: &str = "Not allowed by CORS";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only validation failures carry a JSON body. Everything else answers with a
/// fixed plain-text message and never exposes the underlying fault.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User not found")]
    NotFound,

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("Data access error: {0}")]
    DataAccess(#[from] DataAccessError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            AppError::OriginNotAllowed(origin) => {
                tracing::warn!("Rejected request from origin {origin}");
                (StatusCode::FORBIDDEN, ORIGIN_REJECTED_BODY).into_response()
            }
            AppError::DataAccess(e) => {
                tracing::error!("Data access error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}
