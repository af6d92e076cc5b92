mod sender;
mod sink;
mod value_objects;

pub use sender::NotificationSender;
pub use sink::{NotificationPriority, NotificationSink};
pub use value_objects::{ChannelConfig, ChannelType, NotificationMessage};
