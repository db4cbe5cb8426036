//! Handlers for board workflow automation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::submission;

/// Request body for the stage-timestamp automation.
#[derive(Debug, Deserialize)]
pub struct StageTimestampRequest {
    /// Board item the stage change happened on.
    pub item_id: String,
    /// Date column to stamp.
    pub column_id: String,
}

/// Result payload: the date that was written.
#[derive(Debug, Serialize)]
pub struct StageTimestampResponse {
    pub item_id: String,
    pub column_id: String,
    pub date: String,
}

/// POST /api/v1/automation/stage-timestamp
///
/// Write today's date into a board item's date column. Triggered by the
/// board workflow when an item moves into a tracked stage.
pub async fn stage_timestamp(
    State(state): State<AppState>,
    Json(input): Json<StageTimestampRequest>,
) -> AppResult<impl IntoResponse> {
    if input.item_id.trim().is_empty() || input.column_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "item_id and column_id are required".into(),
        ));
    }

    let date = submission::record_stage_timestamp(&state, &input.item_id, &input.column_id).await?;

    Ok(Json(DataResponse {
        data: StageTimestampResponse {
            item_id: input.item_id,
            column_id: input.column_id,
            date,
        },
    }))
}
