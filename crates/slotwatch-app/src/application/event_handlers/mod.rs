use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use slotwatch_domain::events::{EventHandler, PageContentChanged};
use slotwatch_domain::shared::DomainError;

use crate::application::services::MonitorScheduler;

/// Routes page-change events into the scheduler's debounced trigger.
pub struct PageChangedHandler {
    scheduler: Arc<MonitorScheduler>,
}

impl PageChangedHandler {
    pub fn new(scheduler: Arc<MonitorScheduler>) -> Self {
        Self { scheduler }
    }
}

#[async_trait]
impl EventHandler<PageContentChanged> for PageChangedHandler {
    async fn handle(&self, event: &PageContentChanged) -> Result<(), DomainError> {
        debug!(page = %event.page_url, "Page content changed, nudging scheduler");
        self.scheduler.on_page_content_changed().await;
        Ok(())
    }
}
