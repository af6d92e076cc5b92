mod activity;
mod check_executor;
mod dispatcher;
mod scheduler;

pub use activity::ActivityRecorder;
pub use check_executor::CheckExecutor;
pub use dispatcher::SlotDispatcher;
pub use scheduler::MonitorScheduler;
