pub mod admin;
pub mod automation;
pub mod briefs;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /briefs                              submit (POST), validate dry-run
/// /briefs/{id}                         fetch one brief
///
/// /admin/briefs                        list all briefs
/// /admin/stats                         aggregate statistics
///
/// /automation/stage-timestamp          stamp today's date on a board column
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/briefs", briefs::router())
        .nest("/admin", admin::router())
        .nest("/automation", automation::router())
}
