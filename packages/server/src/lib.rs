pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use axum::extract::DefaultBodyLimit;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        version = "1.0.0",
        description = "CRUD API over an in-memory movie collection"
    ),
    tags(
        (name = "Movies", description = "Movie CRUD operations"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = routes::cors_layer(&state.config.server.cors);
    let body_limit = DefaultBodyLimit::max(state.config.server.body_limit);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::movie_routes())
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .fallback(handlers::fallback::route_not_found)
        .method_not_allowed_fallback(handlers::fallback::route_not_found)
        .layer(body_limit)
        .layer(CatchPanicLayer::custom(handlers::fallback::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
