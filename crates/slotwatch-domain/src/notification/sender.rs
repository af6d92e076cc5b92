use async_trait::async_trait;

use super::NotificationMessage;
use crate::shared::DomainError;

/// Notification sender trait (Strategy pattern)
/// Each out-of-band channel type implements this trait
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a notification message
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;

    /// Test the notification channel connectivity
    async fn test(&self) -> Result<(), DomainError>;
}
