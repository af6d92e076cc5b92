use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use slotwatch_domain::notification::{NotificationMessage, NotificationSender};
use slotwatch_domain::shared::DomainError;

/// SMTP email notification sender.
///
/// The recipient is the criteria's notification target, fixed at
/// construction time by the sender factory.
pub struct EmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailSender {
    pub fn new(
        smtp_host: &str,
        smtp_port: u16,
        username: String,
        password: String,
        from: &str,
        to: &str,
    ) -> Result<Self, DomainError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_host)
            .map_err(|e| DomainError::Infrastructure(format!("Invalid SMTP relay: {e}")))?
            .port(smtp_port)
            .credentials(Credentials::new(username, password))
            .build();

        let from = from
            .parse::<Mailbox>()
            .map_err(|e| DomainError::Validation(format!("Invalid from address: {e}")))?;
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| DomainError::Validation(format!("Invalid notification target: {e}")))?;

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    fn build_body(message: &NotificationMessage) -> String {
        match &message.link {
            Some(link) => format!("{}\n\nBook here: {}", message.content, link),
            None => message.content.clone(),
        }
    }
}

#[async_trait]
impl NotificationSender for EmailSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(&message.title)
            .body(Self::build_body(message))
            .map_err(|e| DomainError::Infrastructure(format!("Failed to build email: {e}")))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("Failed to send email: {e}")))?;

        Ok(())
    }

    async fn test(&self) -> Result<(), DomainError> {
        let test_message = NotificationMessage::new(
            "Test notification",
            "If you can read this, the slot monitor email channel is configured correctly.",
        );

        self.send(&test_message).await
    }
}
