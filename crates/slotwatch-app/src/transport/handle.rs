use tokio::sync::{mpsc, oneshot};

use slotwatch_domain::activity::{ActivityLog, ActivitySeverity};
use slotwatch_domain::criteria::Criteria;
use slotwatch_domain::shared::DomainError;
use slotwatch_domain::slot::SlotCandidate;

use super::messages::{ControlRequest, ControlResponse, Envelope};

/// Client side of the control surface. Clone freely.
#[derive(Clone)]
pub struct MonitorHandle {
    tx: mpsc::Sender<Envelope>,
}

impl MonitorHandle {
    pub(crate) fn new(tx: mpsc::Sender<Envelope>) -> Self {
        Self { tx }
    }

    pub async fn start_monitoring(&self, criteria: Criteria) -> Result<(), DomainError> {
        match self.send(ControlRequest::StartMonitoring { criteria }).await? {
            ControlResponse::Ack => Ok(()),
            ControlResponse::Error { message } => Err(DomainError::Validation(message)),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn stop_monitoring(&self) -> Result<(), DomainError> {
        match self.send(ControlRequest::StopMonitoring).await? {
            ControlResponse::Ack => Ok(()),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn status(&self) -> Result<bool, DomainError> {
        match self.send(ControlRequest::GetStatus).await? {
            ControlResponse::Status { active } => Ok(active),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn check_now(&self) -> Result<(), DomainError> {
        match self.send(ControlRequest::CheckNow).await? {
            ControlResponse::Ack => Ok(()),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn report_slot_found(
        &self,
        candidate: SlotCandidate,
        page_url: impl Into<String>,
    ) -> Result<(), DomainError> {
        let request = ControlRequest::SlotFound {
            candidate,
            page_url: page_url.into(),
        };
        match self.send(request).await? {
            ControlResponse::Ack => Ok(()),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn log_activity(
        &self,
        message: impl Into<String>,
        severity: ActivitySeverity,
    ) -> Result<(), DomainError> {
        let request = ControlRequest::LogActivity {
            message: message.into(),
            severity,
        };
        match self.send(request).await? {
            ControlResponse::Ack => Ok(()),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn notify_page_changed(
        &self,
        page_url: impl Into<String>,
    ) -> Result<(), DomainError> {
        let request = ControlRequest::PageContentChanged {
            page_url: page_url.into(),
        };
        match self.send(request).await? {
            ControlResponse::Ack => Ok(()),
            other => Err(unexpected(&other)),
        }
    }

    pub async fn activity_log(&self, limit: usize) -> Result<ActivityLog, DomainError> {
        match self.send(ControlRequest::GetActivityLog { limit }).await? {
            ControlResponse::ActivityLog { log } => Ok(log),
            ControlResponse::Error { message } => Err(DomainError::Repository(message)),
            other => Err(unexpected(&other)),
        }
    }

    async fn send(&self, request: ControlRequest) -> Result<ControlResponse, DomainError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|_| DomainError::Transport("Control server is gone".to_string()))?;

        reply_rx
            .await
            .map_err(|_| DomainError::Transport("Control server dropped the reply".to_string()))
    }
}

fn unexpected(response: &ControlResponse) -> DomainError {
    DomainError::Transport(format!("Unexpected control response: {response:?}"))
}
