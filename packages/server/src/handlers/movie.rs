use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, ValidationBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::movie::{MessageBody, Movie, MovieData, MovieListQuery, MoviePatch};
use crate::models::validation::{validate_full, validate_partial};
use crate::state::AppState;

pub const MOVIE_DELETED: &str = "Movie deleted";

#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    operation_id = "listMovies",
    summary = "List movies",
    description = "Returns every movie, or only those tagged with `genre` (case-insensitive) when the query parameter is present and non-empty.",
    params(MovieListQuery),
    responses(
        (status = 200, description = "Movies", body = [Movie]),
        (status = 400, description = "Malformed query string", body = ValidationBody),
    ),
)]
#[instrument(skip(state, query), fields(genre = ?query.genre))]
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MovieListQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = match query.genre.as_deref() {
        Some(genre) if !genre.trim().is_empty() => state.store.filter_by_genre(genre)?,
        _ => state.store.list_all()?,
    };
    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    operation_id = "getMovie",
    summary = "Get a movie by ID",
    params(("id" = String, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 400, description = "Undecodable movie ID", body = ValidationBody),
        (status = 404, description = "Movie not found", body = MessageBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.store.find_by_id(&id)?.ok_or(AppError::NotFound)?;
    Ok(Json(movie))
}

#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    operation_id = "createMovie",
    summary = "Create a movie",
    description = "Validates every field and stores the movie under a newly generated ID. A client-supplied `id` is ignored. `rate` defaults to 0.",
    request_body = MovieData,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Validation error", body = ValidationBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let data = validate_full(&payload)?;
    let movie = state.store.insert(data)?;

    Ok((StatusCode::CREATED, Json(movie)))
}

#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "Movies",
    operation_id = "updateMovie",
    summary = "Update a movie",
    description = "Partially updates a movie using PATCH semantics: only provided fields are validated and modified. An empty payload returns the current movie unchanged.",
    params(("id" = String, Path, description = "Movie ID")),
    request_body = MoviePatch,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Validation error", body = ValidationBody),
        (status = 404, description = "Movie not found", body = MessageBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(payload): AppJson<Value>,
) -> Result<Json<Movie>, AppError> {
    let patch = validate_partial(&payload)?;
    let movie = state
        .store
        .update_partial(&id, patch)?
        .ok_or(AppError::NotFound)?;

    Ok(Json(movie))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    operation_id = "deleteMovie",
    summary = "Delete a movie",
    params(("id" = String, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie deleted", body = MessageBody),
        (status = 400, description = "Undecodable movie ID", body = ValidationBody),
        (status = 404, description = "Movie not found", body = MessageBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<MessageBody>, AppError> {
    if !state.store.remove(&id)? {
        return Err(AppError::NotFound);
    }
    Ok(Json(MessageBody::new(MOVIE_DELETED)))
}
