use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use slotwatch_domain::notification::{NotificationMessage, NotificationSender};
use slotwatch_domain::shared::DomainError;

/// Generic JSON webhook notification sender
pub struct WebhookSender {
    url: String,
    client: Client,
}

impl WebhookSender {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }

    fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "title": message.title,
            "body": message.content,
            "link": message.link,
        })
    }
}

#[async_trait]
impl NotificationSender for WebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let payload = self.build_payload(message);

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to send webhook notification: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Infrastructure(format!(
                "Webhook failed with status {}: {}",
                status, body
            )));
        }

        Ok(())
    }

    async fn test(&self) -> Result<(), DomainError> {
        let test_message = NotificationMessage::new(
            "Test notification",
            "If you can read this, the slot monitor webhook channel is configured correctly.",
        );

        self.send(&test_message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Bind an ephemeral port, answer the first request with `response`, then
    /// hang up.
    async fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_send_delivers_to_a_2xx_endpoint() {
        let url =
            one_shot_server("HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                .await;
        let sender = WebhookSender::new(url);
        let message = NotificationMessage::new("Slot available", "2024-05-01 at 14:00 (Main Hall)");

        assert!(sender.send(&message).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_surfaces_non_2xx_as_infrastructure_error() {
        let url = one_shot_server(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 5\r\nconnection: close\r\n\r\noops!",
        )
        .await;
        let sender = WebhookSender::new(url);
        let message = NotificationMessage::new("Slot available", "body");

        let err = sender.send(&message).await.unwrap_err();
        assert!(matches!(err, DomainError::Infrastructure(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_send_maps_connection_failure_to_infrastructure_error() {
        // Bind then drop, so the port is known to refuse connections
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let sender = WebhookSender::new(url);
        let message = NotificationMessage::new("Slot available", "body");

        let err = sender.send(&message).await.unwrap_err();
        assert!(matches!(err, DomainError::Infrastructure(_)));
    }

    #[test]
    fn test_build_payload_carries_all_fields() {
        let sender = WebhookSender::new("https://hooks.example.com/slots".to_string());
        let message = NotificationMessage::new("Slot available", "2024-05-01 at 14:00 (Main Hall)")
            .with_link("https://exams.example.edu/schedule");

        let payload = sender.build_payload(&message);

        assert_eq!(payload["title"], "Slot available");
        assert_eq!(payload["body"], "2024-05-01 at 14:00 (Main Hall)");
        assert_eq!(payload["link"], "https://exams.example.edu/schedule");
    }

    #[test]
    fn test_build_payload_without_link() {
        let sender = WebhookSender::new("https://hooks.example.com/slots".to_string());
        let message = NotificationMessage::new("Slot available", "body");

        let payload = sender.build_payload(&message);

        assert!(payload["link"].is_null());
    }
}
