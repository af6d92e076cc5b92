//! In-process control surface.
//!
//! Clients hold a [`MonitorHandle`] and exchange request/response pairs with
//! the [`ControlServer`] task over channels. The server owns the scheduler;
//! handles are cheap to clone and safe to use from any task.

mod handle;
mod messages;
mod server;

pub use handle::MonitorHandle;
pub use messages::{ControlRequest, ControlResponse};
pub use server::ControlServer;
