mod event_bus;
mod monitor_events;

use std::any::Any;

pub use event_bus::{erase, ErasedEventHandler, EventBus, EventHandler};
pub use monitor_events::{
    MonitoringStarted, MonitoringStopped, PageContentChanged, SlotFound,
};

/// Marker trait for domain events
pub trait DomainEvent: Send + Sync {
    /// Type-erased access for dynamic dispatch
    fn as_any(&self) -> &(dyn Any + Send + Sync);

    /// Stable name of the concrete event type
    fn event_type_name(&self) -> &'static str;
}
