//! Route definitions for brief intake, mounted at `/briefs`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::briefs;
use crate::state::AppState;

/// ```text
/// POST /              -> submit_brief
/// POST /validate      -> validate_brief (dry-run)
/// GET  /{id}          -> get_brief
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(briefs::submit_brief))
        .route("/validate", post(briefs::validate_brief))
        .route("/{id}", get(briefs::get_brief))
}
