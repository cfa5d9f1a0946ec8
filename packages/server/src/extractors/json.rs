use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::validation::ValidationError;

/// A `Json<T>` wrapper that turns body rejections (bad syntax, wrong content
/// type, oversized body) into a validation error on the `body` field, so
/// clients always get the structured 400 shape.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(ValidationError::single("body", e.body_text())))?;
        Ok(AppJson(value))
    }
}
