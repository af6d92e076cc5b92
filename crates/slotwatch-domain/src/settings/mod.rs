mod repository;
mod value_objects;

pub use repository::SettingsRepository;
pub use value_objects::MonitorSettings;
