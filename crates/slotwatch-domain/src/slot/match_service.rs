use chrono::{NaiveDate, NaiveTime};

use crate::criteria::Criteria;
use crate::slot::SlotCandidate;

/// Date formats accepted by best-effort normalization, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Time formats accepted by best-effort normalization, tried in order.
const TIME_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%I:%M %p",
    "%I:%M%p",
    "%I %p",
    "%I%p",
];

/// Domain service deciding whether a candidate satisfies the user's criteria.
///
/// The filter is conjunctive and opt-in: only set criteria constrain the
/// result, unset criteria are vacuously satisfied. Normalization failure never
/// discards a candidate - both sides degrade to literal string comparison,
/// preferring a possible false negative over silently dropping a real slot.
///
/// A candidate whose date and time both failed to resolve never matches,
/// whatever the criteria say. Extraction cannot produce one, but candidates
/// also arrive over the control channel.
pub struct SlotMatchService;

impl SlotMatchService {
    pub fn matches(candidate: &SlotCandidate, criteria: &Criteria) -> bool {
        if !candidate.has_schedule_info() {
            return false;
        }

        if let Some(desired_date) = &criteria.desired_date {
            if Self::normalize_date(&candidate.date) != Self::normalize_date(desired_date) {
                return false;
            }
        }

        if let Some(desired_time) = &criteria.desired_time {
            if Self::normalize_time(&candidate.time) != Self::normalize_time(desired_time) {
                return false;
            }
        }

        if let Some(desired_location) = &criteria.desired_location {
            let candidate_location = candidate.location.to_lowercase();
            if !candidate_location.contains(&desired_location.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// Canonicalize heterogeneous date strings to `YYYY-MM-DD`.
    ///
    /// Unparseable input is returned trimmed, to be compared as-is.
    pub fn normalize_date(raw: &str) -> String {
        let trimmed = raw.trim();
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return date.format("%Y-%m-%d").to_string();
            }
        }
        trimmed.to_string()
    }

    /// Canonicalize heterogeneous time strings to 24-hour `HH:MM`.
    ///
    /// Unparseable input is returned trimmed, to be compared as-is.
    pub fn normalize_time(raw: &str) -> String {
        let trimmed = raw.trim();
        for format in TIME_FORMATS {
            if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
                return time.format("%H:%M").to_string();
            }
        }
        trimmed.to_string()
    }
}
