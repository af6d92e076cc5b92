use async_trait::async_trait;

use super::ActivityLogEntry;
use crate::shared::DomainError;

/// Durable store for the bounded activity log.
///
/// Implementations enforce the capacity cap on append so the persisted log
/// can never exceed it, mirroring the in-memory aggregate.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Append one entry, evicting the oldest beyond capacity.
    async fn append(&self, entry: &ActivityLogEntry) -> Result<(), DomainError>;

    /// Most recent entries, newest first, at most `limit`.
    async fn recent(&self, limit: usize) -> Result<Vec<ActivityLogEntry>, DomainError>;
}
