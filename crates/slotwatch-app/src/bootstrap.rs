//! Wires infrastructure into the application services and starts the
//! background tasks.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use slotwatch_domain::events::erase;
use slotwatch_infrastructure::events::InMemoryEventBus;
use slotwatch_infrastructure::extraction::HtmlSlotExtractor;
use slotwatch_infrastructure::notification::{create_sender, TracingNotificationSink};
use slotwatch_infrastructure::pages::{FetchConfig, HttpPageSource};
use slotwatch_infrastructure::persistence::repositories::{
    SqliteActivityLogRepository, SqliteSettingsRepository,
};
use slotwatch_infrastructure::persistence::Database;

use crate::application::config::AppConfig;
use crate::application::event_handlers::PageChangedHandler;
use crate::application::services::{ActivityRecorder, MonitorScheduler};
use crate::transport::{ControlServer, MonitorHandle};

/// A running application: the control handle plus the tasks behind it.
pub struct App {
    pub handle: MonitorHandle,
    pub scheduler: Arc<MonitorScheduler>,
    server_task: JoinHandle<()>,
}

impl App {
    /// Stop background tasks without touching persisted state, so an active
    /// session resumes on the next boot.
    pub async fn shutdown(self) {
        self.scheduler.shutdown().await;
        self.server_task.abort();
        info!("Shutdown complete");
    }
}

/// Build and start the application from its configuration.
///
/// Restores a persisted active session before returning, so callers get a
/// scheduler that is already monitoring when the last run was.
pub async fn build(config: AppConfig) -> anyhow::Result<App> {
    let database = Database::new(&config.database_path()).await?;
    database.run_migrations().await?;
    let pool = Arc::new(database.pool().clone());

    let settings_repo = Arc::new(SqliteSettingsRepository::new(Arc::clone(&pool)));
    let activity_repo = Arc::new(SqliteActivityLogRepository::new(pool));
    let recorder = ActivityRecorder::new(activity_repo.clone());

    let fetch = FetchConfig {
        timeout_seconds: config.fetch.timeout_seconds,
        user_agent: config.fetch.user_agent.clone(),
    };
    let pages = Arc::new(HttpPageSource::new(config.watch_urls.clone(), &fetch)?);
    let extractor = Arc::new(HtmlSlotExtractor::new()?);
    let sink = Arc::new(TracingNotificationSink);
    let event_bus = Arc::new(InMemoryEventBus::new());

    let scheduler = Arc::new(MonitorScheduler::new(
        pages,
        extractor,
        sink,
        settings_repo,
        recorder,
        event_bus.clone(),
        config.channel.clone(),
        Arc::new(create_sender),
    ));

    event_bus
        .subscribe(erase(PageChangedHandler::new(Arc::clone(&scheduler))))
        .await?;

    scheduler.restore_on_init().await;

    let (server, handle) = ControlServer::new(
        Arc::clone(&scheduler),
        activity_repo,
        event_bus,
    );
    let server_task = tokio::spawn(server.run());

    info!(watched_pages = config.watch_urls.len(), "Slot monitor ready");

    Ok(App {
        handle,
        scheduler,
        server_task,
    })
}
