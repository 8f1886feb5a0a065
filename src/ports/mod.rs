pub mod event_logger;
pub mod notifier;

pub use event_logger::EventLogger;
pub use notifier::Notifier;
