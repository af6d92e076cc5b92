mod aggregate;
mod repository;
mod value_objects;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{ActivityLog, ACTIVITY_LOG_CAPACITY};
pub use repository::ActivityLogRepository;
pub use value_objects::{ActivityLogEntry, ActivitySeverity};
