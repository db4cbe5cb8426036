//! Admin route definitions, mounted at `/admin`.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET /briefs   -> list_briefs
/// GET /stats    -> get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/briefs", get(admin::list_briefs))
        .route("/stats", get(admin::get_stats))
}
