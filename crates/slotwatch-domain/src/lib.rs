// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod activity;
pub mod criteria;
pub mod events;
pub mod extraction;
pub mod notification;
pub mod session;
pub mod settings;
pub mod shared;
pub mod slot;

// Re-exports for convenience
pub use events::DomainEvent;
pub use shared::DomainError;
