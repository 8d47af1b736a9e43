//! Repository layer.
//!
//! [`MovieStore`] is the storage gateway contract; handlers hold it as
//! `Arc<dyn MovieStore>` so the backing store is chosen at startup.

pub mod memory_movie_repo;
pub mod movie_repo;

pub use memory_movie_repo::InMemoryMovieRepo;
pub use movie_repo::MongoMovieRepo;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Create / list / update / delete access to the movie collection.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Cast and persist a new movie, returning it with its assigned id.
    async fn create(&self, input: &CreateMovie) -> Result<Movie, StorageError>;

    /// Every stored movie, in whatever order the store yields them.
    async fn list_all(&self) -> Result<Vec<Movie>, StorageError>;

    /// Overwrite the title of the movie with `id`.
    ///
    /// Returns `None` if no movie has that id. A body without a title leaves
    /// the document untouched but still reports it as found.
    async fn update_by_id(
        &self,
        id: &str,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, StorageError>;

    /// Remove the movie with `id`. Returns `true` if a document was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
