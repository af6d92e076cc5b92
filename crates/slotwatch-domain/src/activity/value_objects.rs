use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Severity tag carried by every activity-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySeverity {
    Info,
    Success,
    Error,
}

impl ActivitySeverity {
    pub fn as_str(&self) -> &str {
        match self {
            ActivitySeverity::Info => "info",
            ActivitySeverity::Success => "success",
            ActivitySeverity::Error => "error",
        }
    }
}

impl FromStr for ActivitySeverity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(ActivitySeverity::Info),
            "success" => Ok(ActivitySeverity::Success),
            "error" => Ok(ActivitySeverity::Error),
            _ => Err(DomainError::Deserialization(format!(
                "Unknown activity severity: {s}"
            ))),
        }
    }
}

impl fmt::Display for ActivitySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of the user-visible audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub message: String,
    pub severity: ActivitySeverity,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn new(message: impl Into<String>, severity: ActivitySeverity) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ActivitySeverity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ActivitySeverity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ActivitySeverity::Error)
    }
}
