use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::criteria::Criteria;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Inactive,
    Active,
}

/// The scheduler's state: at most one live session per process.
///
/// The session value is owned by the scheduler and passed around explicitly -
/// there is no ambient global. The timer handle itself lives next to the
/// scheduler, not here: the session only records the logical on/off state and
/// the criteria the timer was armed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSession {
    status: SessionStatus,
    criteria: Criteria,
    started_at: Option<DateTime<Utc>>,
}

impl MonitoringSession {
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Inactive,
            criteria: Criteria::default(),
            started_at: None,
        }
    }

    /// Transition to `Active` with the given criteria.
    ///
    /// Re-entering start while already active is idempotent in effect: the
    /// criteria are replaced and the caller is told a prior session was
    /// superseded (so it can cancel the old timer).
    pub fn start(&mut self, criteria: Criteria) -> bool {
        let superseded = self.status == SessionStatus::Active;
        self.status = SessionStatus::Active;
        self.criteria = criteria;
        self.started_at = Some(Utc::now());
        superseded
    }

    /// Transition to `Inactive`. No-op when already inactive.
    pub fn stop(&mut self) {
        self.status = SessionStatus::Inactive;
        self.started_at = None;
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}

impl Default for MonitoringSession {
    fn default() -> Self {
        Self::new()
    }
}
