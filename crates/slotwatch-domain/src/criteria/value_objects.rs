use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Fallback polling cadence when no interval is configured
pub const DEFAULT_CHECK_INTERVAL_MINUTES: u32 = 5;

/// User-specified slot filter.
///
/// All filter fields are opt-in: an unset field is vacuously satisfied by any
/// candidate. The criteria are immutable for the lifetime of a monitoring
/// session and replaced wholesale on a settings change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Desired calendar date, as entered by the user (normalized at match time)
    pub desired_date: Option<String>,
    /// Desired time of day, as entered by the user (normalized at match time)
    pub desired_time: Option<String>,
    /// Free-text location substring, matched case-insensitively
    pub desired_location: Option<String>,
    /// Polling cadence in minutes; 0 means "not configured"
    pub check_interval_minutes: u32,
    /// Optional contact address for the out-of-band notification channel
    pub notification_target: Option<String>,
}

impl Criteria {
    /// Interval actually used by the scheduler.
    ///
    /// An absent or invalid stored value (0) falls back to the default,
    /// keeping the >= 1 minute invariant.
    pub fn effective_interval_minutes(&self) -> u32 {
        if self.check_interval_minutes == 0 {
            DEFAULT_CHECK_INTERVAL_MINUTES
        } else {
            self.check_interval_minutes
        }
    }

    /// True when no filter field is set, i.e. every candidate matches.
    pub fn is_unconstrained(&self) -> bool {
        self.desired_date.is_none()
            && self.desired_time.is_none()
            && self.desired_location.is_none()
    }

    /// Validate criteria at the control-surface edge.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.check_interval_minutes == 0 {
            return Err(DomainError::Validation(
                "Check interval must be at least 1 minute".to_string(),
            ));
        }
        if let Some(target) = &self.notification_target {
            if target.trim().is_empty() {
                return Err(DomainError::Validation(
                    "Notification target cannot be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn with_notification_target(mut self, target: impl Into<String>) -> Self {
        self.notification_target = Some(target.into());
        self
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            desired_date: None,
            desired_time: None,
            desired_location: None,
            check_interval_minutes: DEFAULT_CHECK_INTERVAL_MINUTES,
            notification_target: None,
        }
    }
}
