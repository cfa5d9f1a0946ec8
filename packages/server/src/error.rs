use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::models::movie::MessageBody;
use crate::models::validation::{ValidationError, Violation};
use crate::store::StoreError;

pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred";

/// Body of a 400 response: every violation found in the payload.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationBody {
    pub error: Vec<Violation>,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    /// The referenced movie id does not exist.
    NotFound,
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                tracing::debug!("Rejected payload: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationBody {
                        error: err.violations,
                    }),
                )
                    .into_response()
            }
            AppError::NotFound => {
                tracing::debug!("Movie not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageBody::new(MOVIE_NOT_FOUND)),
                )
                    .into_response()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                internal_error_response()
            }
        }
    }
}

/// Generic 500 response; the detail is only ever logged.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody::new(INTERNAL_ERROR)),
    )
        .into_response()
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}
