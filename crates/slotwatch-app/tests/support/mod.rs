#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use slotwatch_app::application::services::{ActivityRecorder, MonitorScheduler};
use slotwatch_domain::activity::{ActivityLogEntry, ActivityLogRepository, ActivitySeverity};
use slotwatch_domain::criteria::Criteria;
use slotwatch_domain::extraction::{PageSnapshot, PageSource, SlotExtractor};
use slotwatch_domain::notification::{ChannelConfig, NotificationPriority, NotificationSink};
use slotwatch_domain::settings::{MonitorSettings, SettingsRepository};
use slotwatch_domain::shared::DomainError;
use slotwatch_domain::slot::SlotCandidate;
use slotwatch_infrastructure::events::InMemoryEventBus;
use slotwatch_infrastructure::notification::create_sender;

/// Page source serving a fixed snapshot set and counting passes.
pub struct StaticPages {
    snapshots: Vec<PageSnapshot>,
    passes: AtomicUsize,
}

impl StaticPages {
    pub fn new(snapshots: Vec<PageSnapshot>) -> Arc<Self> {
        Arc::new(Self {
            snapshots,
            passes: AtomicUsize::new(0),
        })
    }

    pub fn pass_count(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for StaticPages {
    async fn snapshots(&self) -> Result<Vec<PageSnapshot>, DomainError> {
        self.passes.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshots.clone())
    }
}

/// Extractor returning fixed candidates, with an optional scripted failure
/// for pages whose URL contains the marker.
pub struct FixedExtractor {
    candidates: Vec<SlotCandidate>,
    fail_marker: Option<String>,
}

impl FixedExtractor {
    pub fn new(candidates: Vec<SlotCandidate>) -> Arc<Self> {
        Arc::new(Self {
            candidates,
            fail_marker: None,
        })
    }

    pub fn failing_for(candidates: Vec<SlotCandidate>, marker: &str) -> Arc<Self> {
        Arc::new(Self {
            candidates,
            fail_marker: Some(marker.to_string()),
        })
    }
}

impl SlotExtractor for FixedExtractor {
    fn extract(&self, page: &PageSnapshot) -> Result<Vec<SlotCandidate>, DomainError> {
        if let Some(marker) = &self.fail_marker {
            if page.url.contains(marker) {
                return Err(DomainError::Extraction("scripted failure".to_string()));
            }
        }
        Ok(self.candidates.clone())
    }
}

/// Notification sink recording every shown notification body.
#[derive(Default)]
pub struct CountingSink {
    shown: Mutex<Vec<String>>,
}

impl CountingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for CountingSink {
    async fn show(
        &self,
        _id: &str,
        _title: &str,
        body: &str,
        _priority: NotificationPriority,
    ) -> Result<(), DomainError> {
        self.shown.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

/// Settings repository backed by a plain in-memory value.
#[derive(Default)]
pub struct InMemorySettingsRepo {
    state: Mutex<MonitorSettings>,
}

impl InMemorySettingsRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seeded(settings: MonitorSettings) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(settings),
        })
    }

    pub fn current(&self) -> MonitorSettings {
        self.state.lock().unwrap().clone()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepo {
    async fn load(&self) -> Result<MonitorSettings, DomainError> {
        Ok(self.state.lock().unwrap().clone())
    }

    async fn save(&self, settings: &MonitorSettings) -> Result<(), DomainError> {
        *self.state.lock().unwrap() = settings.clone();
        Ok(())
    }

    async fn set_active(&self, active: bool) -> Result<(), DomainError> {
        self.state.lock().unwrap().active = active;
        Ok(())
    }
}

/// Activity log capturing entries in memory, newest first.
#[derive(Default)]
pub struct RecordingActivityRepo {
    entries: Mutex<Vec<ActivityLogEntry>>,
}

impl RecordingActivityRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn has_entry(&self, severity: ActivitySeverity, needle: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.severity == severity && e.message.contains(needle))
    }
}

#[async_trait]
impl ActivityLogRepository for RecordingActivityRepo {
    async fn append(&self, entry: &ActivityLogEntry) -> Result<(), DomainError> {
        self.entries.lock().unwrap().insert(0, entry.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ActivityLogEntry>, DomainError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().take(limit).cloned().collect())
    }
}

/// Wire a scheduler from test doubles, with the real sender factory.
#[allow(clippy::too_many_arguments)]
pub fn scheduler_with(
    pages: Arc<StaticPages>,
    extractor: Arc<dyn SlotExtractor>,
    sink: Arc<CountingSink>,
    settings: Arc<InMemorySettingsRepo>,
    activity: Arc<RecordingActivityRepo>,
    event_bus: Arc<InMemoryEventBus>,
    channel: Option<ChannelConfig>,
) -> Arc<MonitorScheduler> {
    Arc::new(MonitorScheduler::new(
        pages,
        extractor,
        sink,
        settings,
        ActivityRecorder::new(activity),
        event_bus,
        channel,
        Arc::new(create_sender),
    ))
}

pub fn matching_candidate() -> SlotCandidate {
    SlotCandidate {
        date: "2024-05-01".to_string(),
        time: "14:00".to_string(),
        location: "Main Hall".to_string(),
    }
}

pub fn schedule_page(url: &str) -> PageSnapshot {
    PageSnapshot::new(url, "<html><body></body></html>")
}

pub fn criteria_with_interval(minutes: u32) -> Criteria {
    Criteria {
        check_interval_minutes: minutes,
        ..Criteria::default()
    }
}

/// Give spawned tasks a chance to run without advancing the clock.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
