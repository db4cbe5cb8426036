//! Monday.com integration: GraphQL API client plus the job-id extraction
//! and mention conventions the agency board relies on.

pub mod client;
pub mod job_id;

pub use client::{MondayClient, MondayError};
pub use job_id::extract_job_id;
