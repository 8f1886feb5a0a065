mod event_logger;
mod notifier;

pub use event_logger::ConsoleEventLogger;
pub use notifier::{EmailNotifier, SmsNotifier};
