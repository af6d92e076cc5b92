use async_trait::async_trait;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use super::DomainEvent;
use crate::shared::DomainError;

/// Publishes domain events to whoever subscribed to their type.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError>;
}

/// Handles one concrete event type.
#[async_trait]
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    async fn handle(&self, event: &E) -> Result<(), DomainError>;
}

/// Type-erased handler, the form bus implementations store.
///
/// Obtained from a typed [`EventHandler`] via [`erase`]. The key ties the
/// handler back to the event type it was erased from, matching
/// [`DomainEvent::event_type_name`].
#[async_trait]
pub trait ErasedEventHandler: Send + Sync {
    async fn dispatch(&self, event: &(dyn Any + Send + Sync)) -> Result<(), DomainError>;

    fn event_key(&self) -> &'static str;
}

/// Erase a handler's event type for storage on a bus.
pub fn erase<E, H>(handler: H) -> Arc<dyn ErasedEventHandler>
where
    E: DomainEvent + 'static,
    H: EventHandler<E> + 'static,
{
    Arc::new(Erased {
        handler,
        _event: PhantomData,
    })
}

struct Erased<E, H> {
    handler: H,
    _event: PhantomData<fn(E)>,
}

#[async_trait]
impl<E, H> ErasedEventHandler for Erased<E, H>
where
    E: DomainEvent + 'static,
    H: EventHandler<E>,
{
    async fn dispatch(&self, event: &(dyn Any + Send + Sync)) -> Result<(), DomainError> {
        match event.downcast_ref::<E>() {
            Some(event) => self.handler.handle(event).await,
            None => Err(DomainError::Infrastructure(format!(
                "Event does not downcast to {}",
                std::any::type_name::<E>()
            ))),
        }
    }

    fn event_key(&self) -> &'static str {
        std::any::type_name::<E>()
    }
}
