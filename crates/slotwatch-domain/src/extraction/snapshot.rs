use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One captured page: the markup as it was at fetch time.
///
/// Extraction is a pure function of a snapshot and the hint lists; snapshots
/// are never retained or compared across passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    pub html: String,
    pub fetched_at: DateTime<Utc>,
}

impl PageSnapshot {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }
}
