//! Job-id extraction from job-bag email addresses, and the fixed mention
//! targets for out-of-scope escalations.
//!
//! Two local-part shapes are recognised:
//!
//! - `job-123456@sherbetagency.monday.com`
//! - `zo-adv_pulse_5086908443_d98c14f7a796d4aafb52__73877240@euc1.mx.monday.com`
//!
//! Anything else yields `None`, which callers treat as "skip notification",
//! not as an error.

use std::sync::OnceLock;

use regex::Regex;

fn job_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"job-(\d+)@").expect("static pattern"))
}

fn pulse_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"pulse_(\d+)_").expect("static pattern"))
}

/// Extract the Monday item id from a job-bag email, trying the `job-` form
/// first and then the pulse form.
pub fn extract_job_id(email: &str) -> Option<String> {
    for pattern in [job_pattern(), pulse_pattern()] {
        if let Some(caps) = pattern.captures(email) {
            return Some(caps[1].to_string());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Mentions
// ---------------------------------------------------------------------------

/// Monday user ids mentioned on every out-of-scope brief, in mention order.
pub const OUT_OF_SCOPE_MENTIONS: [&str; 4] = [
    "54174400", // Raffaele
    "73877160", // Inge
    "73877240", // Nakai
    "79772203", // Elton
];

/// Body of the escalation update posted when a brief is billed out of
/// scope. Mentions use Monday's `@[user_id]` markup.
pub fn out_of_scope_body(campaign_name: &str, submitter_name: &str) -> String {
    let mentions: Vec<String> = OUT_OF_SCOPE_MENTIONS
        .iter()
        .map(|id| format!("@[{id}]"))
        .collect();
    format!(
        "\u{1F6A8} OUT OF SCOPE BRIEF\n\n{}\n\nCampaign: {campaign_name}\nSubmitted by: {submitter_name}\n\n\
         This brief has been marked as Out of Scope and requires your attention.",
        mentions.join(" ")
    )
}
