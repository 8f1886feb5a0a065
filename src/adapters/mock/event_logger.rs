use crate::ports::event_logger::{EventLogger as EventLoggerTrait, Result};
use std::io;
use std::sync::Mutex;

/// Mock implementation of EventLogger
///
/// Keeps recorded messages in memory.
#[derive(Debug, Default)]
pub struct EventLogger {
    records: Mutex<Vec<String>>,
}

impl EventLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.records.lock().unwrap().last().cloned()
    }
}

impl EventLoggerTrait for EventLogger {
    fn record(&self, message: &str) -> Result<()> {
        self.records.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// EventLogger that always fails, as a full disk or a read-only log file would.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEventLogger;

impl FailingEventLogger {
    pub fn new() -> Self {
        Self
    }
}

impl EventLoggerTrait for FailingEventLogger {
    fn record(&self, _message: &str) -> Result<()> {
        Err(Box::new(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "event log is not writable",
        )))
    }
}
