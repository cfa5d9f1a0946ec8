use std::any::Any;

use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::error::internal_error_response;

pub const NOT_FOUND_PAGE: &str = "<h1>Not found</h1>";

/// Answers any method/path combination no handler is registered for.
pub async fn route_not_found(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::debug!(%method, %uri, "No route matched");
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// Turns a handler panic into the generic 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);
    internal_error_response()
}
