use async_trait::async_trait;

use super::PageSnapshot;
use crate::shared::DomainError;
use crate::slot::SlotCandidate;

/// Heuristic slot extraction over one page snapshot.
///
/// Best-effort by design: a partial result is always preferred over failing
/// the whole page, and an element that yields neither date nor time is
/// silently dropped rather than reported as an error.
pub trait SlotExtractor: Send + Sync {
    fn extract(&self, page: &PageSnapshot) -> Result<Vec<SlotCandidate>, DomainError>;
}

/// Enumeration of the monitored pages currently reachable.
///
/// Returning an empty list means "not on the target site" - the scheduler
/// skips the pass without treating it as a failure.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn snapshots(&self) -> Result<Vec<PageSnapshot>, DomainError>;
}
