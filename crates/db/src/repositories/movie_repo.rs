//! MongoDB-backed repository for the `movies` collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use marquee_core::movie::COLLECTION;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::error::StorageError;
use crate::models::movie::{
    parse_movie_id, CreateMovie, Movie, NewMovie, TitleChange, UpdateMovie,
};
use crate::repositories::MovieStore;
use crate::DbHandle;

/// Provides data access for movies stored in MongoDB.
#[derive(Clone)]
pub struct MongoMovieRepo {
    db: DbHandle,
    movies: Collection<Movie>,
}

impl MongoMovieRepo {
    pub fn new(db: &DbHandle) -> Self {
        Self {
            db: db.clone(),
            movies: db.collection::<Movie>(COLLECTION),
        }
    }

    fn inserts(&self) -> Collection<NewMovie> {
        self.movies.clone_with_type::<NewMovie>()
    }
}

/// The driver generates an ObjectId client-side when `_id` is absent, so any
/// other id type means the document was written by something else.
fn inserted_object_id(inserted: &Bson) -> Result<ObjectId, StorageError> {
    inserted
        .as_object_id()
        .ok_or_else(|| StorageError::UnexpectedId(inserted.to_string()))
}

#[async_trait]
impl MovieStore for MongoMovieRepo {
    async fn create(&self, input: &CreateMovie) -> Result<Movie, StorageError> {
        let new = input.cast()?;
        let result = self.inserts().insert_one(&new).await?;

        let id = inserted_object_id(&result.inserted_id)?;
        Ok(new.into_movie(id))
    }

    async fn list_all(&self) -> Result<Vec<Movie>, StorageError> {
        let cursor = self.movies.find(doc! {}).await?;
        let movies = cursor.try_collect::<Vec<Movie>>().await?;
        Ok(movies)
    }

    async fn update_by_id(
        &self,
        id: &str,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, StorageError> {
        let oid = parse_movie_id(id)?;

        let TitleChange::Set(title) = input.title_change()? else {
            return Ok(self.movies.find_one(doc! { "_id": oid }).await?);
        };
        let title = title.map_or(Bson::Null, Bson::String);

        let updated = self
            .movies
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": { "title": title } })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let oid = parse_movie_id(id)?;
        let result = self.movies.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        crate::health_check(&self.db).await
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn inserted_object_id_accepts_object_ids() {
        let oid = ObjectId::new();
        assert_eq!(inserted_object_id(&Bson::ObjectId(oid)).unwrap(), oid);
    }

    #[test]
    fn inserted_object_id_rejects_other_id_types() {
        assert_matches!(
            inserted_object_id(&Bson::String("custom-key".into())),
            Err(StorageError::UnexpectedId(id)) if id.contains("custom-key")
        );
        assert_matches!(
            inserted_object_id(&Bson::Int32(7)),
            Err(StorageError::UnexpectedId(_))
        );
    }
}
