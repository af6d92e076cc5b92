pub mod config;
pub mod event_handlers;
pub mod services;
