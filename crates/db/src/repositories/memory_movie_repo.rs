//! Process-local movie store.
//!
//! Applies the same id generation and casting rules as the MongoDB
//! repository, keeps documents in insertion order, and can be switched
//! offline to exercise storage failure paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::models::movie::{parse_movie_id, CreateMovie, Movie, TitleChange, UpdateMovie};
use crate::repositories::MovieStore;

/// In-memory implementation of [`MovieStore`].
#[derive(Debug, Default)]
pub struct InMemoryMovieRepo {
    movies: RwLock<Vec<Movie>>,
    offline: AtomicBool,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline, every operation fails with [`StorageError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store is offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieRepo {
    async fn create(&self, input: &CreateMovie) -> Result<Movie, StorageError> {
        self.ensure_online()?;
        let movie = input.cast()?.into_movie(ObjectId::new());
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn list_all(&self) -> Result<Vec<Movie>, StorageError> {
        self.ensure_online()?;
        Ok(self.movies.read().await.clone())
    }

    async fn update_by_id(
        &self,
        id: &str,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, StorageError> {
        self.ensure_online()?;
        let oid = parse_movie_id(id)?;
        let change = input.title_change()?;

        let mut movies = self.movies.write().await;
        let Some(movie) = movies.iter_mut().find(|m| m.id == oid) else {
            return Ok(None);
        };
        if let TitleChange::Set(title) = change {
            movie.title = title;
        }
        Ok(Some(movie.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        self.ensure_online()?;
        let oid = parse_movie_id(id)?;

        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|m| m.id != oid);
        Ok(movies.len() < before)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.ensure_online()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
