mod aggregate;


pub use aggregate::{MonitoringSession, SessionStatus};
