use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

use slotwatch_domain::events::{DomainEvent, ErasedEventHandler, EventBus};
use slotwatch_domain::shared::DomainError;

/// In-memory event bus implementation.
///
/// Dispatches events to subscribed handlers in registration order; a failing
/// handler is logged and the remaining handlers still run.
pub struct InMemoryEventBus {
    handlers: Arc<RwLock<HashMap<String, Vec<Arc<dyn ErasedEventHandler>>>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe a handler under the event key it was erased with
    pub async fn subscribe(&self, handler: Arc<dyn ErasedEventHandler>) -> Result<(), DomainError> {
        let event_type_name = handler.event_key();
        let mut handlers = self.handlers.write().await;

        handlers
            .entry(event_type_name.to_string())
            .or_default()
            .push(handler);

        debug!("Subscribed handler for event type: {}", event_type_name);
        Ok(())
    }

    /// Get the number of handlers for a specific event type
    pub async fn handler_count<E: DomainEvent + 'static>(&self) -> usize {
        let event_type_name = std::any::type_name::<E>();
        let handlers = self.handlers.read().await;
        handlers.get(event_type_name).map_or(0, |h| h.len())
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
        let event_type_name = event.event_type_name();

        debug!("Publishing event: {}", event_type_name);

        let handlers = self.handlers.read().await;

        if let Some(event_handlers) = handlers.get(event_type_name) {
            for handler in event_handlers {
                if let Err(e) = handler.dispatch(event.as_any()).await {
                    // Log and keep going so one handler cannot starve the rest
                    error!("Handler failed to process event {}: {}", event_type_name, e);
                }
            }
        } else {
            debug!("No handlers registered for event type: {}", event_type_name);
        }

        Ok(())
    }
}
