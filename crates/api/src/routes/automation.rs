//! Board-automation route definitions, mounted at `/automation`.

use axum::routing::post;
use axum::Router;

use crate::handlers::automation;
use crate::state::AppState;

/// ```text
/// POST /stage-timestamp   -> stage_timestamp
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/stage-timestamp", post(automation::stage_timestamp))
}
