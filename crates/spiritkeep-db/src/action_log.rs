//! Action-log persistence.
//!
//! Every autonomous action and level-up lands in the `action_logs` table
//! so owners can see what their spiritling got up to while they were
//! away. The engine treats appends as fire-and-forget; the `recent`
//! query exists for the owner-facing history view.

use spiritkeep_core::store::{ActionLogSink, StoreError};
use spiritkeep_types::{ActionKind, ActionLogEntry, ActionLogId, SpiritlingId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Operations on the `action_logs` table.
#[derive(Clone)]
pub struct PgActionLog {
    pool: PgPool,
}

impl PgActionLog {
    /// Create a log bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(
        &self,
        spiritling_id: SpiritlingId,
        kind: ActionKind,
        message: &str,
    ) -> Result<(), DbError> {
        sqlx::query(
            r"INSERT INTO action_logs (id, spiritling_id, kind, message, created_at)
              VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(ActionLogId::new().into_inner())
        .bind(spiritling_id.into_inner())
        .bind(kind.as_str())
        .bind(message)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The most recent entries for one spiritling, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails or a stored kind string is
    /// unrecognized.
    pub async fn recent(
        &self,
        spiritling_id: SpiritlingId,
        limit: i64,
    ) -> Result<Vec<ActionLogEntry>, DbError> {
        let rows = sqlx::query_as::<_, ActionLogRow>(
            r"SELECT id, spiritling_id, kind, message, created_at
              FROM action_logs
              WHERE spiritling_id = $1
              ORDER BY created_at DESC
              LIMIT $2",
        )
        .bind(spiritling_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ActionLogRow::into_domain).collect()
    }
}

impl ActionLogSink for PgActionLog {
    async fn append(
        &self,
        spiritling_id: SpiritlingId,
        kind: ActionKind,
        message: &str,
    ) -> Result<(), StoreError> {
        Ok(self.insert(spiritling_id, kind, message).await?)
    }
}

/// A row from the `action_logs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ActionLogRow {
    id: Uuid,
    spiritling_id: Uuid,
    kind: String,
    message: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ActionLogRow {
    fn into_domain(self) -> Result<ActionLogEntry, DbError> {
        let kind = ActionKind::parse(&self.kind).ok_or_else(|| DbError::Corrupt {
            message: format!("unknown action kind '{}' in log entry {}", self.kind, self.id),
        })?;
        Ok(ActionLogEntry {
            id: ActionLogId::from(self.id),
            spiritling_id: self.spiritling_id.into(),
            kind,
            message: self.message,
            created_at: self.created_at,
        })
    }
}
