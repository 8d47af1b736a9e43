//! Response bodies for the movie routes.
//!
//! The key names differ between routes (`message` on create, `messege` on
//! update and delete). Existing clients read those keys, so they are kept.

use marquee_db::models::movie::Movie;
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "data": [...] }` envelope returned by `GET /movies`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListResponse {
    pub data: Vec<Movie>,
}

/// `{ "message": ... }` body returned by `POST /movies`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Movie added successfully")]
    pub message: &'static str,
}

/// `{ "messege": ... }` body returned by `PATCH` and `DELETE /movies/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MutationResponse {
    #[serde(rename = "messege")]
    #[schema(example = "Movie updated")]
    pub message: &'static str,
}
