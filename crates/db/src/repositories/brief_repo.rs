//! Repository for the `briefs` table.
//!
//! Briefs are append-only: there is no update or delete surface. The
//! admin views read the whole table and aggregate in memory.

use sqlx::types::Json;
use sqlx::PgPool;

use briefdesk_core::brief::{Brief, BriefDraft, DbId};

use crate::models::brief::BriefRow;

const BRIEF_COLUMNS: &str = "id, payload, created_at, updated_at";

/// Provides create/read operations for briefs.
pub struct BriefRepo;

impl BriefRepo {
    /// Persist a validated draft, returning the new row id.
    pub async fn create(pool: &PgPool, draft: &BriefDraft) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO briefs (payload) VALUES ($1) RETURNING id")
            .bind(Json(draft))
            .fetch_one(pool)
            .await
    }

    /// Find one brief by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brief>, sqlx::Error> {
        let query = format!("SELECT {BRIEF_COLUMNS} FROM briefs WHERE id = $1");
        let row = sqlx::query_as::<_, BriefRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(BriefRow::into_brief))
    }

    /// Full-table scan, newest first. Backs the admin list and the
    /// recomputed-on-read statistics.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Brief>, sqlx::Error> {
        let query =
            format!("SELECT {BRIEF_COLUMNS} FROM briefs ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, BriefRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(BriefRow::into_brief).collect())
    }
}
