use crate::ports::event_logger::{EventLogger, Result};

/// Writes each event to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleEventLogger;

impl ConsoleEventLogger {
    pub fn new() -> Self {
        Self
    }
}

impl EventLogger for ConsoleEventLogger {
    fn record(&self, message: &str) -> Result<()> {
        println!("[LOG] {}", message);
        Ok(())
    }
}
