use std::sync::Arc;
use tracing::error;

use slotwatch_domain::activity::{ActivityLogEntry, ActivityLogRepository};

/// Best-effort writer for the user-facing activity log.
///
/// A failed append must never take down the monitoring pass that produced the
/// entry, so store errors are traced and swallowed here.
#[derive(Clone)]
pub struct ActivityRecorder {
    repo: Arc<dyn ActivityLogRepository>,
}

impl ActivityRecorder {
    pub fn new(repo: Arc<dyn ActivityLogRepository>) -> Self {
        Self { repo }
    }

    pub async fn record(&self, entry: ActivityLogEntry) {
        if let Err(e) = self.repo.append(&entry).await {
            error!(error = %e, message = %entry.message, "Failed to append activity entry");
        }
    }

    pub async fn info(&self, message: impl Into<String>) {
        self.record(ActivityLogEntry::info(message)).await;
    }

    pub async fn success(&self, message: impl Into<String>) {
        self.record(ActivityLogEntry::success(message)).await;
    }

    pub async fn error(&self, message: impl Into<String>) {
        self.record(ActivityLogEntry::error(message)).await;
    }
}
