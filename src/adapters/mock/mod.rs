pub mod event_logger;
pub mod notifier;

pub use event_logger::{EventLogger, FailingEventLogger};
pub use notifier::{FailingNotifier, Notifier};
