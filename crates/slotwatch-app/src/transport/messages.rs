use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use slotwatch_domain::activity::{ActivityLog, ActivitySeverity};
use slotwatch_domain::criteria::Criteria;
use slotwatch_domain::slot::SlotCandidate;

/// Requests a client can send to the control server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ControlRequest {
    StartMonitoring { criteria: Criteria },
    StopMonitoring,
    GetStatus,
    CheckNow,
    /// A page context found a slot on its own and wants it dispatched
    SlotFound {
        candidate: SlotCandidate,
        page_url: String,
    },
    LogActivity {
        message: String,
        severity: ActivitySeverity,
    },
    PageContentChanged { page_url: String },
    GetActivityLog { limit: usize },
}

/// Server replies, one per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ControlResponse {
    Ack,
    Status { active: bool },
    ActivityLog { log: ActivityLog },
    Error { message: String },
}

/// A request paired with its reply channel.
pub struct Envelope {
    pub request: ControlRequest,
    pub reply: oneshot::Sender<ControlResponse>,
}
