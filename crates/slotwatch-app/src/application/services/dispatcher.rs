use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use slotwatch_domain::events::{EventBus, SlotFound};
use slotwatch_domain::notification::{
    NotificationMessage, NotificationPriority, NotificationSender, NotificationSink,
};
use slotwatch_domain::slot::MatchedSlot;

use super::ActivityRecorder;

/// Fans one matched slot out to every notification surface.
///
/// The system sink always fires; the out-of-band sender only when one was
/// configured for the session. Delivery failures on either surface are
/// recorded and do not abort the rest of the dispatch, and every dispatch
/// ends with a success entry in the activity log.
pub struct SlotDispatcher {
    sink: Arc<dyn NotificationSink>,
    sender: Option<Arc<dyn NotificationSender>>,
    recorder: ActivityRecorder,
    event_bus: Arc<dyn EventBus>,
}

impl SlotDispatcher {
    pub fn new(
        sink: Arc<dyn NotificationSink>,
        sender: Option<Arc<dyn NotificationSender>>,
        recorder: ActivityRecorder,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            sink,
            sender,
            recorder,
            event_bus,
        }
    }

    pub async fn dispatch(&self, slot: MatchedSlot) {
        let candidate = &slot.candidate;
        info!(summary = %candidate.summary(), page = %slot.page_url, "Dispatching matched slot");

        let id = format!("slot-{}", slot.matched_at.timestamp_millis());
        if let Err(e) = self
            .sink
            .show(
                &id,
                "Slot available",
                &candidate.summary(),
                NotificationPriority::High,
            )
            .await
        {
            warn!(error = %e, "System notification failed");
            self.recorder
                .error(format!("Failed to show notification: {e}"))
                .await;
        }

        if let Some(sender) = &self.sender {
            let message = NotificationMessage::new(
                format!("Slot available: {} at {}", candidate.date, candidate.time),
                format!(
                    "Date: {}\nTime: {}\nLocation: {}",
                    candidate.date, candidate.time, candidate.location
                ),
            )
            .with_link(slot.page_url.clone());

            if let Err(e) = sender.send(&message).await {
                warn!(error = %e, "Channel notification failed");
                self.recorder
                    .error(format!("Failed to send channel notification: {e}"))
                    .await;
            }
        }

        self.recorder
            .success(format!(
                "Slot found: {} at {}",
                candidate.date, candidate.time
            ))
            .await;

        let event = SlotFound {
            slot,
            occurred_at: Utc::now(),
        };
        if let Err(e) = self.event_bus.publish(Box::new(event)).await {
            warn!(error = %e, "Failed to publish slot event");
        }
    }
}
