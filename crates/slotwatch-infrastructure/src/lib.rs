// Infrastructure layer - Technical implementations
// Depends on domain layer, implements its interfaces

pub mod events;
pub mod extraction;
pub mod logging;
pub mod notification;
pub mod pages;
pub mod persistence;
