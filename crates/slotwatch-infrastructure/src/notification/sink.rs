use async_trait::async_trait;
use tracing::info;

use slotwatch_domain::notification::{NotificationPriority, NotificationSink};
use slotwatch_domain::shared::DomainError;

/// Default notification sink writing through the tracing pipeline.
///
/// Stands in for the host system's notification surface when the process
/// runs headless; a desktop integration would provide its own sink.
pub struct TracingNotificationSink;

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn show(
        &self,
        id: &str,
        title: &str,
        body: &str,
        priority: NotificationPriority,
    ) -> Result<(), DomainError> {
        info!(
            notification_id = id,
            priority = ?priority,
            "{title}: {body}"
        );
        Ok(())
    }
}
