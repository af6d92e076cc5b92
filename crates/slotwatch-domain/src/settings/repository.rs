use async_trait::async_trait;

use super::MonitorSettings;
use crate::shared::DomainError;

/// Durable key/value store for monitoring settings.
///
/// Last-writer-wins semantics; each write is its own unit, no multi-key
/// atomicity is assumed. A store with no saved row loads as defaults.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> Result<MonitorSettings, DomainError>;

    async fn save(&self, settings: &MonitorSettings) -> Result<(), DomainError>;

    /// Flip only the active flag, leaving criteria untouched.
    async fn set_active(&self, active: bool) -> Result<(), DomainError>;
}
