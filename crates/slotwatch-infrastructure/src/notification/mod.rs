mod email;
mod sender_factory;
mod sink;
mod webhook;

pub use email::EmailSender;
pub use sender_factory::create_sender;
pub use sink::TracingNotificationSink;
pub use webhook::WebhookSender;
