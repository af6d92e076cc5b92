use slotwatch_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling in repositories
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Repository with context
    /// Usage: `result.map_repo_error("Load settings")?`
    fn map_repo_error(self, context: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Repository(format!("{context}: {e}")))
    }
}
