use std::sync::Arc;
use tracing::{debug, error, info, warn};

use slotwatch_domain::criteria::Criteria;
use slotwatch_domain::extraction::{PageSnapshot, PageSource, SlotExtractor};
use slotwatch_domain::shared::DomainError;
use slotwatch_domain::slot::{MatchedSlot, SlotMatchService};

use super::{ActivityRecorder, SlotDispatcher};

/// One monitoring pass: fetch snapshots, extract candidates, match, dispatch.
///
/// Errors never escape a pass. A failed fetch run logs and ends the pass; a
/// failure on one page is recorded and the remaining pages still run. The
/// timer loop can therefore call this unconditionally forever.
pub struct CheckExecutor {
    pages: Arc<dyn PageSource>,
    extractor: Arc<dyn SlotExtractor>,
    dispatcher: Arc<SlotDispatcher>,
    recorder: ActivityRecorder,
    criteria: Criteria,
}

impl CheckExecutor {
    pub fn new(
        pages: Arc<dyn PageSource>,
        extractor: Arc<dyn SlotExtractor>,
        dispatcher: Arc<SlotDispatcher>,
        recorder: ActivityRecorder,
        criteria: Criteria,
    ) -> Self {
        Self {
            pages,
            extractor,
            dispatcher,
            recorder,
            criteria,
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn dispatcher(&self) -> Arc<SlotDispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub async fn run_pass(&self) {
        let snapshots = match self.pages.snapshots().await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                self.recorder
                    .error(format!("Error checking for slots: {e}"))
                    .await;
                return;
            }
        };

        if snapshots.is_empty() {
            self.recorder
                .info("Not on target site - skipping check")
                .await;
            return;
        }

        for snapshot in &snapshots {
            if let Err(e) = self.check_page(snapshot).await {
                if e.is_recoverable() {
                    warn!(page = %snapshot.url, error = %e, "Page check failed, will retry next pass");
                } else {
                    error!(page = %snapshot.url, error = %e, "Page check failed");
                }
                self.recorder
                    .error(format!("Error checking {}: {e}", snapshot.url))
                    .await;
            }
        }
    }

    async fn check_page(&self, snapshot: &PageSnapshot) -> Result<(), DomainError> {
        let candidates = self.extractor.extract(snapshot)?;
        debug!(
            page = %snapshot.url,
            candidates = candidates.len(),
            "Extraction pass complete"
        );

        let mut matched = 0usize;
        for candidate in candidates {
            if SlotMatchService::matches(&candidate, &self.criteria) {
                matched += 1;
                self.dispatcher
                    .dispatch(MatchedSlot::new(candidate, &snapshot.url))
                    .await;
            }
        }

        if matched > 0 {
            info!(page = %snapshot.url, matched, "Matching slots dispatched");
        }

        Ok(())
    }
}
