//! Admin handlers: full-scan listings and aggregate statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use briefdesk_core::stats::{self, BriefMetrics, UserStat};
use briefdesk_db::repositories::BriefRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Aggregate statistics payload for the admin dashboard.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub user_stats: Vec<UserStat>,
    pub metrics: BriefMetrics,
}

/// GET /api/v1/admin/briefs
///
/// List every stored brief, newest first.
pub async fn list_briefs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let briefs = BriefRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: briefs }))
}

/// GET /api/v1/admin/stats
///
/// Aggregate statistics over all briefs. Computed with a full scan on
/// every call; the brief table is small enough that this is fine and it
/// keeps the numbers exact with no counters to drift.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let briefs = BriefRepo::list_all(&state.pool).await?;
    let drafts: Vec<_> = briefs.into_iter().map(|b| b.draft).collect();

    Ok(Json(DataResponse {
        data: StatsResponse {
            user_stats: stats::user_stats(&drafts),
            metrics: stats::metrics(&drafts),
        },
    }))
}
