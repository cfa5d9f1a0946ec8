use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::validation::ValidationError;

/// A `Path<T>` wrapper that reports undecodable segments (such as invalid
/// percent-encoding) as a validation error on the `id` field.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            // Missing params mean the route table and handler disagree.
            Err(e) if e.status().is_server_error() => Err(AppError::Internal(e.body_text())),
            Err(e) => Err(AppError::Validation(ValidationError::single(
                "id",
                e.body_text(),
            ))),
        }
    }
}
