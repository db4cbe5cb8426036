//! Submission orchestrator: validate → persist → notify.
//!
//! Persistence is authoritative: once the row is written the operation is
//! committed and everything after it (board update, out-of-scope alert,
//! AI subitems, webhook) is best-effort. Soft failures are logged, carried
//! in the outcome payload, and never roll back the brief or surface as an
//! error to the submitter.
//!
//! The board updates are planned as pure data first ([`plan_updates`]),
//! then executed; the plan layer is what the scenario tests exercise.

use serde::Serialize;

use briefdesk_core::brief::{BillingType, BriefDraft, DbId};
use briefdesk_core::error::CoreError;
use briefdesk_core::summary;
use briefdesk_core::validation;
use briefdesk_db::repositories::BriefRepo;
use briefdesk_monday::{extract_job_id, job_id, MondayClient};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::webhook;

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Result of one best-effort post-commit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    /// The step ran; `detail` is step-specific (update id, subitem count).
    Completed { detail: String },
    /// The step did not apply (no token, no job id, not configured).
    Skipped { reason: String },
    /// The step ran and failed; the brief stays persisted regardless.
    Failed { message: String },
}

/// What the submitter gets back: whether the record is saved is always
/// explicit, and each notification step reports independently so callers
/// can tell "record saved" apart from "agency board updated".
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub brief_id: DbId,
    /// Monday item id derived from the job-bag email, when recognised.
    pub job_id: Option<String>,
    pub board_update: StepStatus,
    /// Present only for out-of-scope briefs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_scope_alert: Option<StepStatus>,
    pub subitems: StepStatus,
    pub webhook: StepStatus,
}

// ---------------------------------------------------------------------------
// Planning (pure)
// ---------------------------------------------------------------------------

/// Why a planned update is being posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Summary,
    OutOfScopeAlert,
}

/// One update to post on the board item, in order.
#[derive(Debug, Clone)]
pub struct PlannedUpdate {
    pub kind: UpdateKind,
    pub body: String,
}

/// Build the ordered list of board updates for a validated draft: the
/// summary always, plus the management alert for out-of-scope billing.
pub fn plan_updates(draft: &BriefDraft) -> Vec<PlannedUpdate> {
    let mut updates = vec![PlannedUpdate {
        kind: UpdateKind::Summary,
        body: summary::render(draft),
    }];
    if draft.billing_type == BillingType::OutOfScope {
        updates.push(PlannedUpdate {
            kind: UpdateKind::OutOfScopeAlert,
            body: job_id::out_of_scope_body(&draft.campaign_name, &draft.user_name),
        });
    }
    updates
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Run the full submission flow for one draft.
///
/// Validation failure aborts with field errors and nothing persisted; a
/// persistence failure is a hard error. Everything downstream of the
/// insert reports through [`StepStatus`] instead of failing the request.
pub async fn submit(state: &AppState, draft: BriefDraft) -> AppResult<SubmissionOutcome> {
    let errors = validation::validate(&draft);
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    let brief_id = BriefRepo::create(&state.pool, &draft).await?;
    tracing::info!(brief_id, campaign = %draft.campaign_name, "Brief persisted");

    let job_id = extract_job_id(&draft.job_bag_email);

    let (board_update, out_of_scope_alert) = post_board_updates(state, &draft, job_id.as_deref()).await;
    let subitems = post_subitems(state, &draft, job_id.as_deref(), &board_update).await;
    let webhook = webhook::notify(state, &draft, job_id.as_deref()).await;

    Ok(SubmissionOutcome {
        brief_id,
        job_id,
        board_update,
        out_of_scope_alert,
        subitems,
        webhook,
    })
}

/// Post the planned updates to the board. Returns the summary-update
/// status and, for out-of-scope briefs, the alert status.
async fn post_board_updates(
    state: &AppState,
    draft: &BriefDraft,
    job_id: Option<&str>,
) -> (StepStatus, Option<StepStatus>) {
    let wants_alert = draft.billing_type == BillingType::OutOfScope;

    let Some(monday) = &state.monday else {
        let skipped = StepStatus::Skipped {
            reason: "Monday API token not configured".into(),
        };
        return (skipped.clone(), wants_alert.then_some(skipped));
    };
    let Some(job_id) = job_id else {
        tracing::info!(email = %draft.job_bag_email, "No job id in job-bag email, skipping board update");
        let skipped = StepStatus::Skipped {
            reason: "Could not extract job id from job-bag email".into(),
        };
        return (skipped.clone(), wants_alert.then_some(skipped));
    };

    let mut statuses = Vec::new();
    for update in plan_updates(draft) {
        let status = match monday.create_update(job_id, &update.body).await {
            Ok(update_id) => {
                tracing::info!(job_id, update_id, kind = ?update.kind, "Posted board update");
                if update.kind == UpdateKind::Summary {
                    attach_summary_file(monday, &update_id, draft, &update.body).await;
                }
                StepStatus::Completed { detail: update_id }
            }
            Err(err) => {
                tracing::warn!(job_id, kind = ?update.kind, error = %err, "Board update failed");
                StepStatus::Failed {
                    message: err.to_string(),
                }
            }
        };
        statuses.push(status);
    }

    // plan_updates yields the summary first, then the alert when planned.
    let mut statuses = statuses.into_iter();
    let summary_status = statuses.next().unwrap_or(StepStatus::Failed {
        message: "No summary update planned".into(),
    });
    let alert = if wants_alert { statuses.next() } else { None };
    (summary_status, alert)
}

/// Attach the rendered summary to the update as a plain-text file so the
/// board keeps a downloadable copy of the brief. Failure here only loses
/// the attachment, never the update.
async fn attach_summary_file(
    monday: &MondayClient,
    update_id: &str,
    draft: &BriefDraft,
    body: &str,
) {
    let file_name = format!("{}-brief.txt", slug(&draft.campaign_name));
    match monday
        .add_file_to_update(update_id, &file_name, body.as_bytes().to_vec())
        .await
    {
        Ok(asset_id) => {
            tracing::info!(update_id, asset_id, "Attached brief file to update");
        }
        Err(err) => {
            tracing::warn!(update_id, error = %err, "Brief file attachment failed");
        }
    }
}

/// Lowercase alphanumeric slug for attachment file names.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "campaign".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ask the assist model for a task breakdown and create the surviving
/// suggestions as subitems. Requires the summary update path to have been
/// available (client + job id).
async fn post_subitems(
    state: &AppState,
    draft: &BriefDraft,
    job_id: Option<&str>,
    board_update: &StepStatus,
) -> StepStatus {
    let Some(assist) = &state.assist else {
        return StepStatus::Skipped {
            reason: "AI assist not configured".into(),
        };
    };
    let (Some(monday), Some(job_id)) = (&state.monday, job_id) else {
        return StepStatus::Skipped {
            reason: "No board item to attach subitems to".into(),
        };
    };
    if matches!(board_update, StepStatus::Skipped { .. }) {
        return StepStatus::Skipped {
            reason: "Board update was skipped".into(),
        };
    }

    let suggestions = match assist.suggest_subitems(&summary::render(draft)).await {
        Ok(suggestions) => suggestions,
        Err(err) => {
            tracing::warn!(error = %err, "AI subitem suggestion failed");
            return StepStatus::Failed {
                message: err.to_string(),
            };
        }
    };

    let mut created = 0u32;
    for suggestion in &suggestions {
        match monday
            .create_subitem(job_id, &suggestion.title, suggestion.description.as_deref())
            .await
        {
            Ok(subitem_id) => {
                tracing::info!(job_id, subitem_id, title = %suggestion.title, "Created subitem");
                created += 1;
            }
            Err(err) => {
                tracing::warn!(job_id, title = %suggestion.title, error = %err, "Subitem creation failed");
            }
        }
    }
    StepStatus::Completed {
        detail: format!("{created} of {} subitems created", suggestions.len()),
    }
}

// ---------------------------------------------------------------------------
// Stage-timestamp automation
// ---------------------------------------------------------------------------

/// Record today's date in a board column for an item, used by the workflow
/// automation when an item enters a named stage. Idempotent: the column
/// simply holds the last written date.
pub async fn record_stage_timestamp(
    state: &AppState,
    item_id: &str,
    column_id: &str,
) -> AppResult<String> {
    let monday = state
        .monday
        .as_ref()
        .ok_or(AppError::NotConfigured("Monday API token"))?;
    let board_id = state
        .notify
        .monday_board_id
        .as_deref()
        .ok_or(AppError::NotConfigured("Monday board id"))?;

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    monday
        .change_column_value(board_id, item_id, column_id, &today)
        .await
        .map_err(|err| AppError::InternalError(err.to_string()))?;

    tracing::info!(item_id, column_id, date = %today, "Stage timestamp recorded");
    Ok(today)
}
