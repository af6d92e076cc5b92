use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use slotwatch_domain::criteria::Criteria;
use slotwatch_domain::settings::{MonitorSettings, SettingsRepository};
use slotwatch_domain::shared::DomainError;

use crate::persistence::result_ext::ResultExt;

/// SQLite implementation of SettingsRepository.
///
/// Single upserted row; each write is its own unit, last writer wins.
pub struct SqliteSettingsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSettingsRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn load(&self) -> Result<MonitorSettings, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT desired_date, desired_time, desired_location,
                   check_interval_minutes, notification_target, active
            FROM monitor_settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await
        .map_repo_error("Load monitor settings")?;

        let Some(row) = row else {
            return Ok(MonitorSettings::default());
        };

        let interval: i64 = row.get("check_interval_minutes");
        let criteria = Criteria {
            desired_date: row.get("desired_date"),
            desired_time: row.get("desired_time"),
            desired_location: row.get("desired_location"),
            check_interval_minutes: u32::try_from(interval).unwrap_or(0),
            notification_target: row.get("notification_target"),
        };
        let active: bool = row.get("active");

        Ok(MonitorSettings::new(criteria, active))
    }

    async fn save(&self, settings: &MonitorSettings) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO monitor_settings (
                id, desired_date, desired_time, desired_location,
                check_interval_minutes, notification_target, active, updated_at
            )
            VALUES (
                1, ?, ?, ?, ?, ?, ?,
                strftime('%Y-%m-%dT%H:%M:%SZ', 'now')
            )
            ON CONFLICT(id) DO UPDATE SET
                desired_date = excluded.desired_date,
                desired_time = excluded.desired_time,
                desired_location = excluded.desired_location,
                check_interval_minutes = excluded.check_interval_minutes,
                notification_target = excluded.notification_target,
                active = excluded.active,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&settings.criteria.desired_date)
        .bind(&settings.criteria.desired_time)
        .bind(&settings.criteria.desired_location)
        .bind(i64::from(settings.criteria.check_interval_minutes))
        .bind(&settings.criteria.notification_target)
        .bind(settings.active)
        .execute(self.pool.as_ref())
        .await
        .map_repo_error("Save monitor settings")?;

        Ok(())
    }

    async fn set_active(&self, active: bool) -> Result<(), DomainError> {
        // Row may not exist yet when stop is the first thing persisted
        let result = sqlx::query(
            r#"
            UPDATE monitor_settings
            SET active = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%SZ', 'now')
            WHERE id = 1
            "#,
        )
        .bind(active)
        .execute(self.pool.as_ref())
        .await
        .map_repo_error("Set active flag")?;

        if result.rows_affected() == 0 {
            let settings = MonitorSettings::new(Criteria::default(), active);
            self.save(&settings).await?;
        }

        Ok(())
    }
}
