use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for a field the extractor could not resolve
pub const UNKNOWN_FIELD: &str = "Unknown";

/// A plausibly bookable slot lifted from one page snapshot.
///
/// Candidates are transient: produced fresh on every extraction pass and never
/// compared across passes. Field values are raw page text; normalization
/// happens at match time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCandidate {
    pub date: String,
    pub time: String,
    pub location: String,
}

impl SlotCandidate {
    /// Build a candidate from optionally resolved fields.
    ///
    /// Returns `None` when neither date nor time resolved to a concrete
    /// value - such an element is not considered a slot at all.
    pub fn from_fields(
        date: Option<String>,
        time: Option<String>,
        location: Option<String>,
    ) -> Option<Self> {
        let date = date.filter(|v| !v.trim().is_empty());
        let time = time.filter(|v| !v.trim().is_empty());

        if date.is_none() && time.is_none() {
            return None;
        }

        Some(Self {
            date: date.unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            time: time.unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            location: location
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        })
    }

    /// True iff at least one of date/time carries a concrete value.
    pub fn has_schedule_info(&self) -> bool {
        (self.date != UNKNOWN_FIELD && !self.date.trim().is_empty())
            || (self.time != UNKNOWN_FIELD && !self.time.trim().is_empty())
    }

    /// One-line summary used in notifications and log entries.
    pub fn summary(&self) -> String {
        format!("{} at {} ({})", self.date, self.time, self.location)
    }
}

/// A candidate that passed the user's criteria, ready for dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSlot {
    pub candidate: SlotCandidate,
    /// URL of the page the candidate was extracted from
    pub page_url: String,
    pub matched_at: DateTime<Utc>,
}

impl MatchedSlot {
    pub fn new(candidate: SlotCandidate, page_url: impl Into<String>) -> Self {
        Self {
            candidate,
            page_url: page_url.into(),
            matched_at: Utc::now(),
        }
    }
}
