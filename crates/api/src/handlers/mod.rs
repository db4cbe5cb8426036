//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the API.
//! Handlers delegate to `briefdesk_db` repositories or the submission
//! orchestrator and map errors via [`crate::error::AppError`].

pub mod admin;
pub mod automation;
pub mod briefs;
