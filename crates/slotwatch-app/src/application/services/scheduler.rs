use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, warn};

use slotwatch_domain::criteria::Criteria;
use slotwatch_domain::events::{EventBus, MonitoringStarted, MonitoringStopped};
use slotwatch_domain::extraction::{PageSource, SlotExtractor};
use slotwatch_domain::notification::{ChannelConfig, NotificationSender, NotificationSink};
use slotwatch_domain::session::MonitoringSession;
use slotwatch_domain::settings::{MonitorSettings, SettingsRepository};
use slotwatch_domain::shared::DomainError;
use slotwatch_domain::slot::{MatchedSlot, SlotCandidate};

use super::{ActivityRecorder, CheckExecutor, SlotDispatcher};

/// Window during which repeated page-change triggers collapse into one pass.
const CONTENT_CHANGE_DEBOUNCE: Duration = Duration::from_secs(5);

/// Builds the out-of-band sender for a session, given the channel
/// configuration and the criteria's notification target.
pub type SenderFactory = Arc<
    dyn Fn(&ChannelConfig, &str) -> Result<Arc<dyn NotificationSender>, DomainError> + Send + Sync,
>;

/// A running timer task and the signal that retires it.
///
/// Cancellation lands at the inter-pass sleep, so an in-flight pass always
/// finishes before the task exits.
struct TimerHandle {
    task: JoinHandle<()>,
    cancel: Arc<Notify>,
}

impl TimerHandle {
    fn retire(&self) {
        self.cancel.notify_one();
    }
}

/// Owns the monitoring lifecycle: one timer, one session, restart on boot.
///
/// `start` arms a fresh timer task and retires any previous one, so two
/// overlapping sessions cannot exist. The timer runs one pass immediately and
/// then sleeps for the criteria's interval between passes. All state mutation
/// goes through this type; the timer task itself only borrows an executor.
pub struct MonitorScheduler {
    pages: Arc<dyn PageSource>,
    extractor: Arc<dyn SlotExtractor>,
    sink: Arc<dyn NotificationSink>,
    settings_repo: Arc<dyn SettingsRepository>,
    recorder: ActivityRecorder,
    event_bus: Arc<dyn EventBus>,
    channel_config: Option<ChannelConfig>,
    sender_factory: SenderFactory,

    session: Mutex<MonitoringSession>,
    timer: Mutex<Option<TimerHandle>>,
    active_executor: Mutex<Option<Arc<CheckExecutor>>>,
    last_content_trigger: Mutex<Option<Instant>>,
}

impl MonitorScheduler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pages: Arc<dyn PageSource>,
        extractor: Arc<dyn SlotExtractor>,
        sink: Arc<dyn NotificationSink>,
        settings_repo: Arc<dyn SettingsRepository>,
        recorder: ActivityRecorder,
        event_bus: Arc<dyn EventBus>,
        channel_config: Option<ChannelConfig>,
        sender_factory: SenderFactory,
    ) -> Self {
        Self {
            pages,
            extractor,
            sink,
            settings_repo,
            recorder,
            event_bus,
            channel_config,
            sender_factory,
            session: Mutex::new(MonitoringSession::new()),
            timer: Mutex::new(None),
            active_executor: Mutex::new(None),
            last_content_trigger: Mutex::new(None),
        }
    }

    /// Start monitoring with the given criteria.
    ///
    /// Invalid criteria (or an unusable channel setup) refuse the start and
    /// leave the current session untouched. A start while already active
    /// supersedes the old timer in place.
    pub async fn start(&self, criteria: Criteria) -> Result<(), DomainError> {
        if let Err(e) = criteria.validate() {
            self.recorder
                .error(format!("Cannot start monitoring: {e}"))
                .await;
            return Err(e);
        }

        let sender = self.build_sender(&criteria).await?;

        let dispatcher = Arc::new(SlotDispatcher::new(
            Arc::clone(&self.sink),
            sender,
            self.recorder.clone(),
            Arc::clone(&self.event_bus),
        ));
        let executor = Arc::new(CheckExecutor::new(
            Arc::clone(&self.pages),
            Arc::clone(&self.extractor),
            dispatcher,
            self.recorder.clone(),
            criteria.clone(),
        ));

        // Persisted before the timer starts so a crash right after still
        // resumes on the next boot.
        let settings = MonitorSettings::new(criteria.clone(), true);
        if let Err(e) = self.settings_repo.save(&settings).await {
            warn!(error = %e, "Failed to persist monitor settings");
            self.recorder
                .error(format!("Failed to save settings: {e}"))
                .await;
        }

        let superseded = self.session.lock().await.start(criteria.clone());
        if superseded {
            info!("Restarting monitoring with new criteria");
        }

        let handle = spawn_timer(Arc::clone(&executor));
        if let Some(old) = self.timer.lock().await.replace(handle) {
            old.retire();
        }
        *self.active_executor.lock().await = Some(executor);

        self.recorder.info("Monitoring started").await;
        let event = MonitoringStarted {
            criteria,
            occurred_at: Utc::now(),
        };
        if let Err(e) = self.event_bus.publish(Box::new(event)).await {
            warn!(error = %e, "Failed to publish start event");
        }

        Ok(())
    }

    /// Stop monitoring. Safe to call when already inactive.
    ///
    /// An in-flight pass is allowed to finish; no further pass starts.
    pub async fn stop(&self) {
        if let Some(handle) = self.timer.lock().await.take() {
            handle.retire();
        }
        *self.active_executor.lock().await = None;
        self.session.lock().await.stop();

        if let Err(e) = self.settings_repo.set_active(false).await {
            warn!(error = %e, "Failed to persist inactive state");
            self.recorder
                .error(format!("Failed to save settings: {e}"))
                .await;
        }

        self.recorder.info("Monitoring stopped").await;
        let event = MonitoringStopped {
            occurred_at: Utc::now(),
        };
        if let Err(e) = self.event_bus.publish(Box::new(event)).await {
            warn!(error = %e, "Failed to publish stop event");
        }
    }

    /// Resume a session that was active when the process last exited.
    pub async fn restore_on_init(&self) {
        let settings = match self.settings_repo.load().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to load persisted settings, staying idle");
                self.recorder
                    .error(format!("Failed to load settings: {e}"))
                    .await;
                return;
            }
        };

        if !settings.active {
            return;
        }

        info!("Resuming monitoring from persisted state");
        if let Err(e) = self.start(settings.criteria).await {
            warn!(error = %e, "Persisted criteria no longer valid, staying idle");
        }
    }

    pub async fn is_active(&self) -> bool {
        self.session.lock().await.is_active()
    }

    /// Run one pass now, outside the timer cadence. No-op while inactive.
    pub async fn check_now(&self) {
        let executor = self.active_executor.lock().await.clone();
        if let Some(executor) = executor {
            executor.run_pass().await;
        }
    }

    /// Secondary trigger: a monitored page reported changed content.
    ///
    /// Collapsed within [`CONTENT_CHANGE_DEBOUNCE`] so chatty pages cannot
    /// turn the poll into a busy loop.
    pub async fn on_page_content_changed(&self) {
        {
            let mut last = self.last_content_trigger.lock().await;
            let now = Instant::now();
            if let Some(previous) = *last {
                if now.duration_since(previous) < CONTENT_CHANGE_DEBOUNCE {
                    return;
                }
            }
            *last = Some(now);
        }
        self.check_now().await;
    }

    /// Dispatch a slot reported from outside the poll loop.
    ///
    /// Delivered even while inactive, through a sink-only dispatcher, since
    /// the report already happened and the user wants to hear about it.
    pub async fn report_slot(&self, candidate: SlotCandidate, page_url: String) {
        let slot = MatchedSlot::new(candidate, page_url);
        let dispatcher = self
            .active_executor
            .lock()
            .await
            .as_ref()
            .map(|executor| executor.dispatcher());

        match dispatcher {
            Some(dispatcher) => dispatcher.dispatch(slot).await,
            None => {
                let fallback = SlotDispatcher::new(
                    Arc::clone(&self.sink),
                    None,
                    self.recorder.clone(),
                    Arc::clone(&self.event_bus),
                );
                fallback.dispatch(slot).await;
            }
        }
    }

    /// Tear the timer down without touching persisted state, for process
    /// exit. The session resumes on the next boot via
    /// [`Self::restore_on_init`].
    pub async fn shutdown(&self) {
        if let Some(handle) = self.timer.lock().await.take() {
            handle.retire();
            handle.task.abort();
        }
        *self.active_executor.lock().await = None;
    }

    async fn build_sender(
        &self,
        criteria: &Criteria,
    ) -> Result<Option<Arc<dyn NotificationSender>>, DomainError> {
        let Some(config) = &self.channel_config else {
            return Ok(None);
        };

        let Some(target) = &criteria.notification_target else {
            let err = DomainError::Validation(
                "Notification target is required for the configured channel".to_string(),
            );
            self.recorder
                .error("Cannot start monitoring: notification target is missing")
                .await;
            return Err(err);
        };

        match (self.sender_factory)(config, target) {
            Ok(sender) => Ok(Some(sender)),
            Err(e) => {
                self.recorder
                    .error(format!("Cannot start monitoring: {e}"))
                    .await;
                Err(e)
            }
        }
    }
}

fn spawn_timer(executor: Arc<CheckExecutor>) -> TimerHandle {
    let interval =
        Duration::from_secs(u64::from(executor.criteria().effective_interval_minutes()) * 60);
    let cancel = Arc::new(Notify::new());
    let cancelled = Arc::clone(&cancel);

    let task = tokio::spawn(async move {
        loop {
            executor.run_pass().await;
            tokio::select! {
                _ = cancelled.notified() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }
    });

    TimerHandle { task, cancel }
}
