use serde::{Deserialize, Serialize};

/// Error severity levels, aligned with activity-log severities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl DomainError {
    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DomainError::Validation(_) | DomainError::NotFound(_) => ErrorSeverity::Info,
            DomainError::Extraction(_) => ErrorSeverity::Warning,
            DomainError::Repository(_)
            | DomainError::Infrastructure(_)
            | DomainError::Transport(_)
            | DomainError::Serialization(_)
            | DomainError::Deserialization(_)
            | DomainError::NotImplemented(_) => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable on the next cycle
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::Infrastructure(_)
                | DomainError::Transport(_)
                | DomainError::Extraction(_)
                | DomainError::Repository(_)
        )
    }
}
