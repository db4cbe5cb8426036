//! AI-assisted task breakdown for submitted briefs.
//!
//! Sends a rendered brief summary to an OpenAI-compatible chat-completions
//! endpoint and parses the reply into subitem suggestions. Suggestions
//! whose titles look like workflow stages (those already exist as board
//! columns) are dropped, and the list is capped before being forwarded to
//! the board. The whole path is best-effort; callers log and swallow
//! failures.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Maximum number of subitems forwarded per brief.
pub const MAX_SUBITEMS: usize = 10;

/// Workflow-stage phrasings that must never become subitems. Matching is
/// a case-insensitive substring test against the suggestion title.
pub const STAGE_DENYLIST: &[&str] = &[
    "internal review",
    "final sign-off",
    "final signoff",
    "sign off",
    "client approval",
    "awaiting feedback",
];

/// One suggested subitem from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubitemSuggestion {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Expected shape of the model reply.
#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    subitems: Vec<SubitemSuggestion>,
}

/// Errors from the assist layer.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Assist API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Model reply was not valid suggestion JSON: {0}")]
    BadReply(String),
}

/// Drop denylisted titles and cap the list at [`MAX_SUBITEMS`]. Order of
/// surviving suggestions is preserved.
pub fn filter_suggestions(suggestions: Vec<SubitemSuggestion>) -> Vec<SubitemSuggestion> {
    suggestions
        .into_iter()
        .filter(|s| {
            let title = s.title.to_lowercase();
            !STAGE_DENYLIST.iter().any(|phrase| title.contains(phrase))
        })
        .take(MAX_SUBITEMS)
        .collect()
}

/// Parse a model reply into suggestions, tolerating a Markdown code fence
/// around the JSON.
pub fn parse_reply(content: &str) -> Result<Vec<SubitemSuggestion>, AssistError> {
    let trimmed = content.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    let payload: SuggestionPayload =
        serde_json::from_str(body).map_err(|e| AssistError::BadReply(e.to_string()))?;
    Ok(payload.subitems)
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

const SYSTEM_PROMPT: &str = "You are a creative-agency producer. Given a campaign brief, \
    break the work into concrete production tasks. Reply with JSON only, shaped as \
    {\"subitems\": [{\"title\": \"...\", \"description\": \"...\"}]}. Do not invent \
    workflow stages such as reviews or sign-offs.";

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct AssistClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AssistClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Ask the model for a task breakdown of one rendered summary.
    /// The result is already denylist-filtered and capped.
    pub async fn suggest_subitems(
        &self,
        summary: &str,
    ) -> Result<Vec<SubitemSuggestion>, AssistError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": summary },
            ],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Assist API returned non-success status");
            return Err(AssistError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AssistError::BadReply(e.to_string()))?;
        let content = parsed["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AssistError::BadReply("missing message content".to_string()))?;

        Ok(filter_suggestions(parse_reply(content)?))
    }
}
