//! Storage gateway for the movie catalogue.
//!
//! Owns the document-store connection and exposes it through the
//! [`MovieStore`](repositories::MovieStore) trait so the HTTP layer never
//! touches the driver directly.

pub mod error;
pub mod models;
pub mod repositories;

use mongodb::bson::doc;
use mongodb::{Client, Database};

pub use error::StorageError;

/// Handle to the database holding the movie collection.
pub type DbHandle = Database;

/// Connect to the document store and select `database`.
///
/// The driver pools connections internally; the returned handle is cheap to
/// clone and is meant to be created once per process.
pub async fn connect(uri: &str, database: &str) -> Result<DbHandle, StorageError> {
    tracing::debug!(database, "Connecting to document store");
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(database))
}

/// Round-trip a `ping` command to verify the store is reachable.
pub async fn health_check(db: &DbHandle) -> Result<(), StorageError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
