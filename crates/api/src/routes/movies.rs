//! Route definitions for the movie collection.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes, mounted at the root.
///
/// ```text
/// GET    /movies          -> list_movies
/// POST   /movies          -> create_movie
/// PATCH  /movies/{id}     -> update_movie
/// DELETE /movies/{id}     -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/{id}",
            patch(movies::update_movie).delete(movies::delete_movie),
        )
}
