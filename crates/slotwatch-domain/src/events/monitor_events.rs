use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::criteria::Criteria;
use crate::events::DomainEvent;
use crate::slot::MatchedSlot;

/// Macro to implement DomainEvent trait with type name
macro_rules! impl_domain_event {
    ($type:ty) => {
        impl DomainEvent for $type {
            fn as_any(&self) -> &(dyn Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

/// Event fired when monitoring starts (or restarts with new criteria)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringStarted {
    pub criteria: Criteria,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(MonitoringStarted);

/// Event fired when monitoring stops
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringStopped {
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(MonitoringStopped);

/// Event fired when a matching slot has been found on a monitored page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotFound {
    pub slot: MatchedSlot,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(SlotFound);

/// Event fired when a monitored page reports changed content.
///
/// The scheduler treats this as a secondary, debounced trigger next to the
/// periodic timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContentChanged {
    pub page_url: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(PageContentChanged);
