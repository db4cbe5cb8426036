//! Outbound webhook notification for downstream consumers.
//!
//! Posts a small JSON envelope after a brief is persisted. Strictly
//! best-effort: no retries, failures are logged and reported in the
//! submission outcome only.

use serde::Serialize;

use briefdesk_core::brief::BriefDraft;

use crate::state::AppState;
use crate::submission::StepStatus;

/// Payload posted to the configured webhook URL.
#[derive(Debug, Serialize)]
pub struct WebhookEnvelope<'a> {
    pub event: &'static str,
    pub campaign_name: &'a str,
    pub client_name: &'a str,
    pub brand_name: &'a str,
    pub submitted_by: &'a str,
    pub billing_type: &'a str,
    pub priority: &'a str,
    pub submitted_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<&'a str>,
}

/// Fire the brief-submitted webhook if a URL is configured.
pub async fn notify(state: &AppState, draft: &BriefDraft, job_id: Option<&str>) -> StepStatus {
    let Some(url) = state.notify.webhook_url.as_deref() else {
        return StepStatus::Skipped {
            reason: "Webhook URL not configured".into(),
        };
    };

    let envelope = WebhookEnvelope {
        event: "brief_submitted",
        campaign_name: &draft.campaign_name,
        client_name: &draft.client_name,
        brand_name: &draft.brand_name,
        submitted_by: &draft.user_name,
        billing_type: draft.billing_type.label(),
        priority: draft.priority.label(),
        submitted_at: chrono::Utc::now().to_rfc3339(),
        job_id,
    };

    match state.http.post(url).json(&envelope).send().await {
        Ok(response) if response.status().is_success() => {
            tracing::info!(url, "Webhook delivered");
            StepStatus::Completed {
                detail: format!("HTTP {}", response.status().as_u16()),
            }
        }
        Ok(response) => {
            tracing::warn!(url, status = %response.status(), "Webhook rejected");
            StepStatus::Failed {
                message: format!("Webhook returned HTTP {}", response.status().as_u16()),
            }
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "Webhook request failed");
            StepStatus::Failed {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_missing_job_id() {
        let envelope = WebhookEnvelope {
            event: "brief_submitted",
            campaign_name: "Summer Launch",
            client_name: "Acme",
            brand_name: "Sparkle",
            submitted_by: "Inge",
            billing_type: "Retainer",
            priority: "High",
            submitted_at: "2026-08-30T12:00:00+00:00".to_string(),
            job_id: None,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("job_id").is_none());
        assert_eq!(json["event"], "brief_submitted");
    }
}
