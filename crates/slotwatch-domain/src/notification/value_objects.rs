use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Notification message to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message title
    pub title: String,
    /// Message content/body
    pub content: String,
    /// Optional link back to the source page
    pub link: Option<String>,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Channel type enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// SMTP email notification
    Email,
    /// Generic JSON webhook
    Webhook,
}

impl ChannelType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Webhook => "webhook",
        }
    }
}

impl FromStr for ChannelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(ChannelType::Email),
            "webhook" => Ok(ChannelType::Webhook),
            _ => Err(DomainError::Deserialization(format!(
                "Unknown channel type: {s}"
            ))),
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Out-of-band channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelConfig {
    /// SMTP email configuration; the recipient comes from the criteria's
    /// notification target at dispatch time
    Email {
        smtp_host: String,
        smtp_port: u16,
        username: String,
        password: String,
        from: String,
    },
    /// Webhook configuration
    Webhook { url: String },
}

impl ChannelConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            ChannelConfig::Email {
                smtp_host,
                smtp_port,
                username,
                password,
                from,
            } => {
                if smtp_host.trim().is_empty() {
                    return Err(DomainError::Validation(
                        "SMTP host cannot be empty".to_string(),
                    ));
                }
                if *smtp_port == 0 {
                    return Err(DomainError::Validation(
                        "SMTP port must be greater than 0".to_string(),
                    ));
                }
                if username.trim().is_empty() {
                    return Err(DomainError::Validation(
                        "Username cannot be empty".to_string(),
                    ));
                }
                if password.trim().is_empty() {
                    return Err(DomainError::Validation(
                        "Password cannot be empty".to_string(),
                    ));
                }
                if from.trim().is_empty() {
                    return Err(DomainError::Validation(
                        "From address cannot be empty".to_string(),
                    ));
                }
            }
            ChannelConfig::Webhook { url } => {
                if url.trim().is_empty() {
                    return Err(DomainError::Validation(
                        "Webhook URL cannot be empty".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Get channel type from config
    pub fn channel_type(&self) -> ChannelType {
        match self {
            ChannelConfig::Email { .. } => ChannelType::Email,
            ChannelConfig::Webhook { .. } => ChannelType::Webhook,
        }
    }
}
