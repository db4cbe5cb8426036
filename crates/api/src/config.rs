/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Outbound-notification configuration. Everything here is optional:
/// a missing Monday token disables the whole board-update path without
/// failing submissions, and the webhook and AI assist are opt-in.
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    /// Monday.com API token (`MONDAY_API_TOKEN`). Absent = notifications off.
    pub monday_token: Option<String>,
    /// Board id used by the stage-timestamp automation (`MONDAY_BOARD_ID`).
    pub monday_board_id: Option<String>,
    /// Fire-and-forget webhook target (`WEBHOOK_URL`).
    pub webhook_url: Option<String>,
    /// AI assist settings; requires key and model to both be set.
    pub assist: Option<AssistConfig>,
}

/// Settings for the AI task-breakdown collaborator.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Base URL of an OpenAI-compatible API (`AI_BASE_URL`).
    pub base_url: String,
    /// API key (`AI_API_KEY`).
    pub api_key: String,
    /// Model name (`AI_MODEL`).
    pub model: String,
}

impl NotifyConfig {
    /// Load notification configuration from environment variables.
    ///
    /// | Env Var           | Default                     |
    /// |-------------------|-----------------------------|
    /// | `MONDAY_API_TOKEN`| unset (notifications off)   |
    /// | `MONDAY_BOARD_ID` | unset (automation off)      |
    /// | `WEBHOOK_URL`     | unset (webhook off)         |
    /// | `AI_API_KEY`      | unset (assist off)          |
    /// | `AI_MODEL`        | unset (assist off)          |
    /// | `AI_BASE_URL`     | `https://api.openai.com/v1` |
    pub fn from_env() -> Self {
        let non_empty = |var: &str| std::env::var(var).ok().filter(|v| !v.trim().is_empty());

        let assist = match (non_empty("AI_API_KEY"), non_empty("AI_MODEL")) {
            (Some(api_key), Some(model)) => Some(AssistConfig {
                base_url: non_empty("AI_BASE_URL")
                    .unwrap_or_else(|| "https://api.openai.com/v1".into()),
                api_key,
                model,
            }),
            _ => None,
        };

        Self {
            monday_token: non_empty("MONDAY_API_TOKEN"),
            monday_board_id: non_empty("MONDAY_BOARD_ID"),
            webhook_url: non_empty("WEBHOOK_URL"),
            assist,
        }
    }
}
