use std::sync::Arc;

use marquee_db::repositories::MovieStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage gateway for the movie collection, chosen at startup.
    pub movies: Arc<dyn MovieStore>,
}
