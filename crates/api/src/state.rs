use std::sync::Arc;

use briefdesk_assist::AssistClient;
use briefdesk_monday::MondayClient;

use crate::config::{NotifyConfig, ServerConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: briefdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Notification configuration (webhook URL, board id).
    pub notify: Arc<NotifyConfig>,
    /// Monday.com client; `None` when no API token is configured, which
    /// disables the whole notification path without failing submissions.
    pub monday: Option<Arc<MondayClient>>,
    /// AI task-breakdown client; `None` when assist is not configured.
    pub assist: Option<Arc<AssistClient>>,
    /// Plain HTTP client for outbound webhooks.
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state from configuration, constructing the optional outbound
    /// clients once so their connection pools are shared across requests.
    pub fn new(
        pool: briefdesk_db::DbPool,
        config: ServerConfig,
        notify: NotifyConfig,
    ) -> Self {
        let monday = notify
            .monday_token
            .clone()
            .map(|token| Arc::new(MondayClient::new(token)));
        let assist = notify.assist.clone().map(|cfg| {
            Arc::new(AssistClient::new(cfg.base_url, cfg.api_key, cfg.model))
        });

        Self {
            pool,
            config: Arc::new(config),
            notify: Arc::new(notify),
            monday,
            assist,
            http: reqwest::Client::new(),
        }
    }
}
