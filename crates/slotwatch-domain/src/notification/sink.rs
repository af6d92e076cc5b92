use async_trait::async_trait;

use crate::shared::DomainError;

/// Display priority of a system notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationPriority {
    Normal,
    High,
}

/// The host system's notification surface.
///
/// Fire-and-forget, best-effort: a sink failure is logged by the caller and
/// never retried. The `id` is derived from the dispatch timestamp, which is
/// collision-free in practice since there is one dispatch per matched event.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn show(
        &self,
        id: &str,
        title: &str,
        body: &str,
        priority: NotificationPriority,
    ) -> Result<(), DomainError>;
}
