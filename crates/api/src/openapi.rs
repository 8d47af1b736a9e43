//! OpenAPI document for the public API, generated from the `#[utoipa::path]`
//! annotations on the movie handlers and the schema derives on the models.

use marquee_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use utoipa::OpenApi;

use crate::handlers::movies;
use crate::response::{MessageResponse, MovieListResponse, MutationResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Marquee movie catalogue", version = "1.0.0"),
    paths(
        movies::create_movie,
        movies::list_movies,
        movies::update_movie,
        movies::delete_movie,
    ),
    components(schemas(
        Movie,
        CreateMovie,
        UpdateMovie,
        MovieListResponse,
        MessageResponse,
        MutationResponse,
    )),
    tags(
        (name = "Movies", description = "Movie CRUD backed by the document store")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_movie_operation() {
        let doc = ApiDoc::openapi();

        let collection = doc.paths.paths.get("/movies").expect("/movies path");
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = doc.paths.paths.get("/movies/{id}").expect("/movies/{id} path");
        assert!(item.patch.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn movie_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Movie"));
        assert!(schemas.contains_key("MutationResponse"));
    }
}
