use axum::routing::get;
use axum::Router;

use crate::handlers::docs;
use crate::state::AppState;

/// Documentation routes.
///
/// ```text
/// GET /api-docs                -> swagger_ui
/// GET /api-docs/openapi.json   -> openapi_json
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api-docs", get(docs::swagger_ui))
        .route(docs::OPENAPI_JSON_PATH, get(docs::openapi_json))
}
