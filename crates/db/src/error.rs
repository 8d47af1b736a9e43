use marquee_core::error::CoreError;

/// Failure of a storage gateway operation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Connectivity, server or (de)serialization failure reported by the driver.
    #[error("Database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// The identifier is not a valid document id.
    #[error("Malformed movie id: {0}")]
    MalformedId(String),

    /// A field could not be cast to its stored type.
    #[error(transparent)]
    Cast(#[from] CoreError),

    /// The store reported an inserted `_id` that is not an ObjectId.
    #[error("Unexpected inserted id: {0}")]
    UnexpectedId(String),

    /// The store refused the operation because it is offline.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
