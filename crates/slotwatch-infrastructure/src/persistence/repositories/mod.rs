mod activity_log_repo;
mod settings_repo;

pub use activity_log_repo::SqliteActivityLogRepository;
pub use settings_repo::SqliteSettingsRepository;
