use std::sync::Arc;

use slotwatch_domain::notification::{ChannelConfig, NotificationSender};
use slotwatch_domain::shared::DomainError;

use super::email::EmailSender;
use super::webhook::WebhookSender;

/// Create a notification sender based on channel configuration.
///
/// `target` is the criteria's notification target; only the email channel
/// uses it (webhooks deliver to their configured URL).
pub fn create_sender(
    config: &ChannelConfig,
    target: &str,
) -> Result<Arc<dyn NotificationSender>, DomainError> {
    config.validate()?;

    match config {
        ChannelConfig::Email {
            smtp_host,
            smtp_port,
            username,
            password,
            from,
        } => Ok(Arc::new(EmailSender::new(
            smtp_host,
            *smtp_port,
            username.clone(),
            password.clone(),
            from,
            target,
        )?)),
        ChannelConfig::Webhook { url } => Ok(Arc::new(WebhookSender::new(url.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_is_refused() {
        let config = ChannelConfig::Webhook {
            url: "".to_string(),
        };

        assert!(create_sender(&config, "student@example.edu").is_err());
    }

    #[test]
    fn test_webhook_sender_is_created() {
        let config = ChannelConfig::Webhook {
            url: "https://hooks.example.com/slots".to_string(),
        };

        assert!(create_sender(&config, "student@example.edu").is_ok());
    }
}
