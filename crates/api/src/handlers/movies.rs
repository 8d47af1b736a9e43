//! Handlers for the movie collection.
//!
//! Each handler performs exactly one storage operation and maps the outcome
//! to the route's fixed response. Storage failures are caught here and never
//! reach a global error handler; the status used for them differs per route:
//!
//! | Route                  | Storage failure           |
//! |------------------------|---------------------------|
//! | `POST /movies`         | 404 `{message}`           |
//! | `GET /movies`          | 500, empty body           |
//! | `PATCH /movies/{id}`   | 500 `{messege}`           |
//! | `DELETE /movies/{id}`  | 500 `{messege}`           |
//!
//! A body sent without a JSON content type is read as an empty object.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::movie::{
    MSG_ADDED, MSG_CREATE_FAILED, MSG_DELETED, MSG_NOT_FOUND, MSG_STORAGE_FAILED, MSG_UPDATED,
};
use marquee_db::models::movie::{CreateMovie, UpdateMovie};

use crate::error::AppResult;
use crate::response::{MessageResponse, MovieListResponse, MutationResponse};
use crate::state::AppState;

/// POST /movies
///
/// Add a new movie. Fields are cast by the storage layer; any failure,
/// including an uncastable field, answers 404.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    summary = "Add a new movie to the database",
    request_body = CreateMovie,
    responses(
        (status = 200, description = "The movie is successfully added", body = MessageResponse),
        (status = 404, description = "Cannot add the movie", body = MessageResponse),
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<Response> {
    let input = json_or_default(payload)?;

    let response = match state.movies.create(&input).await {
        Ok(movie) => {
            tracing::info!(movie_id = %movie.id, "Movie created");
            message(StatusCode::OK, MSG_ADDED)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create movie");
            message(StatusCode::NOT_FOUND, MSG_CREATE_FAILED)
        }
    };

    Ok(response)
}

/// GET /movies
///
/// List every stored movie. A storage failure answers 500 with no body.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    summary = "Get all movies from the database",
    responses(
        (status = 200, description = "The list of all the movies", body = MovieListResponse),
        (status = 500, description = "Cannot get the list of movies (empty body)"),
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Response {
    match state.movies.list_all().await {
        Ok(data) => {
            tracing::debug!(count = data.len(), "Movies listed");
            (StatusCode::OK, Json(MovieListResponse { data })).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to list movies");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// PATCH /movies/{id}
///
/// Overwrite the title of a movie. Other fields in the body are ignored.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Update the movie with the specified id",
    params(("id" = String, Path, description = "The movie id")),
    request_body = UpdateMovie,
    responses(
        (status = 200, description = "The movie is successfully updated", body = MutationResponse),
        (status = 404, description = "The movie is not found", body = MutationResponse),
        (status = 500, description = "Internal server error", body = MutationResponse),
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMovie>, JsonRejection>,
) -> AppResult<Response> {
    let input = json_or_default(payload)?;

    let response = match state.movies.update_by_id(&id, &input).await {
        Ok(Some(movie)) => {
            tracing::info!(movie_id = %movie.id, "Movie updated");
            mutation(StatusCode::OK, MSG_UPDATED)
        }
        Ok(None) => {
            tracing::debug!(movie_id = %id, "Movie to update not found");
            mutation(StatusCode::NOT_FOUND, MSG_NOT_FOUND)
        }
        Err(err) => {
            tracing::error!(movie_id = %id, error = %err, "Failed to update movie");
            mutation(StatusCode::INTERNAL_SERVER_ERROR, MSG_STORAGE_FAILED)
        }
    };

    Ok(response)
}

/// DELETE /movies/{id}
///
/// Delete a movie. Answers 200 whether or not a document was removed.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Delete the movie with the specified id",
    params(("id" = String, Path, description = "The movie id")),
    responses(
        (status = 200, description = "The movie is deleted, or never existed", body = MutationResponse),
        (status = 500, description = "Internal server error", body = MutationResponse),
    )
)]
pub async fn delete_movie(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.movies.delete_by_id(&id).await {
        Ok(removed) => {
            tracing::info!(movie_id = %id, removed, "Movie deleted");
            mutation(StatusCode::OK, MSG_DELETED)
        }
        Err(err) => {
            tracing::error!(movie_id = %id, error = %err, "Failed to delete movie");
            mutation(StatusCode::INTERNAL_SERVER_ERROR, MSG_STORAGE_FAILED)
        }
    }
}

/// Unwrap a JSON body, treating a request without `Content-Type:
/// application/json` as `{}`. Malformed JSON is still rejected.
fn json_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

fn message(status: StatusCode, message: &'static str) -> Response {
    (status, Json(MessageResponse { message })).into_response()
}

fn mutation(status: StatusCode, message: &'static str) -> Response {
    (status, Json(MutationResponse { message })).into_response()
}
