mod event_logger;

pub use event_logger::{DEFAULT_LOG_FILE, FileEventLogger};
