use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use slotwatch_domain::activity::{
    ActivityLogEntry, ActivityLogRepository, ActivitySeverity, ACTIVITY_LOG_CAPACITY,
};
use slotwatch_domain::shared::DomainError;

use crate::persistence::result_ext::ResultExt;

/// SQLite implementation of ActivityLogRepository.
///
/// The capacity cap is enforced with a pruning delete per append, so the
/// persisted log can never exceed it regardless of process restarts.
pub struct SqliteActivityLogRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteActivityLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLogRepository for SqliteActivityLogRepository {
    async fn append(&self, entry: &ActivityLogEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO activity_log (message, severity, timestamp)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&entry.message)
        .bind(entry.severity.as_str())
        .bind(entry.timestamp.to_rfc3339())
        .execute(self.pool.as_ref())
        .await
        .map_repo_error("Append activity entry")?;

        sqlx::query(
            r#"
            DELETE FROM activity_log
            WHERE id NOT IN (
                SELECT id FROM activity_log ORDER BY id DESC LIMIT ?
            )
            "#,
        )
        .bind(ACTIVITY_LOG_CAPACITY as i64)
        .execute(self.pool.as_ref())
        .await
        .map_repo_error("Prune activity log")?;

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ActivityLogEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT message, severity, timestamp
            FROM activity_log
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(self.pool.as_ref())
        .await
        .map_repo_error("Load activity log")?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let message: String = row.get("message");
            let severity_str: String = row.get("severity");
            let timestamp_str: String = row.get("timestamp");

            let severity: ActivitySeverity = severity_str.parse()?;
            let timestamp = timestamp_str
                .parse::<DateTime<Utc>>()
                .map_repo_error("Parse activity timestamp")?;

            entries.push(ActivityLogEntry {
                message,
                severity,
                timestamp,
            });
        }

        Ok(entries)
    }
}
