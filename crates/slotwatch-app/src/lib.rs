pub mod application;
pub mod bootstrap;
pub mod transport;
