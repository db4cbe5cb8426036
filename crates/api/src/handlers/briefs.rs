//! Handlers for brief intake.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use briefdesk_core::brief::{BriefDraft, DbId};
use briefdesk_core::error::CoreError;
use briefdesk_db::repositories::BriefRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::submission;

/// POST /api/v1/briefs
///
/// Validate, persist, and fan out notifications for a new campaign brief.
/// Validation failures return 422 with per-field errors; once the brief is
/// persisted the response is 201 even if downstream notifications failed
/// (their statuses are reported in the outcome payload).
pub async fn submit_brief(
    State(state): State<AppState>,
    Json(draft): Json<BriefDraft>,
) -> AppResult<impl IntoResponse> {
    let outcome = submission::submit(&state, draft).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// GET /api/v1/briefs/{id}
///
/// Fetch a single stored brief.
pub async fn get_brief(
    State(state): State<AppState>,
    Path(brief_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let brief = BriefRepo::find_by_id(&state.pool, brief_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brief",
            id: brief_id,
        }))?;

    Ok(Json(DataResponse { data: brief }))
}

/// POST /api/v1/briefs/validate
///
/// Dry-run validation: returns the field errors a submission would produce,
/// without persisting or notifying. An empty list means the draft is valid.
pub async fn validate_brief(Json(draft): Json<BriefDraft>) -> AppResult<impl IntoResponse> {
    let errors = briefdesk_core::validation::validate(&draft);

    Ok(Json(DataResponse { data: errors }))
}
