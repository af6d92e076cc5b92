use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use slotwatch_domain::activity::{ActivityLog, ActivityLogEntry, ActivityLogRepository};
use slotwatch_domain::events::{EventBus, PageContentChanged};

use super::handle::MonitorHandle;
use super::messages::{ControlRequest, ControlResponse, Envelope};
use crate::application::services::MonitorScheduler;

const CONTROL_QUEUE_DEPTH: usize = 32;

/// Server side of the control surface: one task draining the request queue.
pub struct ControlServer {
    scheduler: Arc<MonitorScheduler>,
    activity_repo: Arc<dyn ActivityLogRepository>,
    event_bus: Arc<dyn EventBus>,
    rx: mpsc::Receiver<Envelope>,
}

impl ControlServer {
    /// Build a server and the handle clients use to reach it.
    pub fn new(
        scheduler: Arc<MonitorScheduler>,
        activity_repo: Arc<dyn ActivityLogRepository>,
        event_bus: Arc<dyn EventBus>,
    ) -> (Self, MonitorHandle) {
        let (tx, rx) = mpsc::channel(CONTROL_QUEUE_DEPTH);
        let server = Self {
            scheduler,
            activity_repo,
            event_bus,
            rx,
        };
        (server, MonitorHandle::new(tx))
    }

    /// Drain requests until every handle is dropped.
    pub async fn run(mut self) {
        while let Some(envelope) = self.rx.recv().await {
            let response = self.handle(envelope.request).await;
            // A client that gave up waiting is not an error
            let _ = envelope.reply.send(response);
        }
        debug!("Control server shutting down, all handles dropped");
    }

    async fn handle(&self, request: ControlRequest) -> ControlResponse {
        match request {
            ControlRequest::StartMonitoring { criteria } => {
                match self.scheduler.start(criteria).await {
                    Ok(()) => ControlResponse::Ack,
                    Err(e) => ControlResponse::Error {
                        message: e.to_string(),
                    },
                }
            }
            ControlRequest::StopMonitoring => {
                self.scheduler.stop().await;
                ControlResponse::Ack
            }
            ControlRequest::GetStatus => ControlResponse::Status {
                active: self.scheduler.is_active().await,
            },
            ControlRequest::CheckNow => {
                self.scheduler.check_now().await;
                ControlResponse::Ack
            }
            ControlRequest::SlotFound {
                candidate,
                page_url,
            } => {
                self.scheduler.report_slot(candidate, page_url).await;
                ControlResponse::Ack
            }
            ControlRequest::LogActivity { message, severity } => {
                let entry = ActivityLogEntry::new(message, severity);
                if let Err(e) = self.activity_repo.append(&entry).await {
                    warn!(error = %e, "Failed to append client activity entry");
                }
                ControlResponse::Ack
            }
            ControlRequest::PageContentChanged { page_url } => {
                let event = PageContentChanged {
                    page_url,
                    occurred_at: Utc::now(),
                };
                if let Err(e) = self.event_bus.publish(Box::new(event)).await {
                    warn!(error = %e, "Failed to publish page change event");
                }
                ControlResponse::Ack
            }
            ControlRequest::GetActivityLog { limit } => {
                match self.activity_repo.recent(limit).await {
                    Ok(entries) => ControlResponse::ActivityLog {
                        log: ActivityLog::from_entries(entries),
                    },
                    Err(e) => ControlResponse::Error {
                        message: e.to_string(),
                    },
                }
            }
        }
    }
}
