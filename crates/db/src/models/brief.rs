//! Brief row model.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use briefdesk_core::brief::{Brief, BriefDraft, DbId, Timestamp};

/// A row from the `briefs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BriefRow {
    pub id: DbId,
    pub payload: Json<BriefDraft>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BriefRow {
    /// Convert into the domain record the formatter and stats operate on.
    pub fn into_brief(self) -> Brief {
        Brief {
            id: self.id,
            created_at: self.created_at,
            draft: self.payload.0,
        }
    }
}
