use crate::domain::value_objects::MemberId;
use crate::ports::notifier::{Notifier as NotifierTrait, Result};
use std::io;
use std::sync::Mutex;

/// Mock implementation of Notifier
///
/// Records every (recipient, message) pair instead of delivering it,
/// so tests can assert on what would have been sent.
#[derive(Debug, Default)]
pub struct Notifier {
    sent: Mutex<Vec<(MemberId, String)>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, in call order
    pub fn sent(&self) -> Vec<(MemberId, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, recipient: &MemberId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| r == recipient)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl NotifierTrait for Notifier {
    fn send(&self, recipient: &MemberId, message: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.clone(), message.to_string()));
        Ok(())
    }
}

/// Notifier whose delivery always fails, as an unreachable mail server would.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingNotifier;

impl FailingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotifierTrait for FailingNotifier {
    fn send(&self, _recipient: &MemberId, _message: &str) -> Result<()> {
        Err(Box::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "notification channel is unreachable",
        )))
    }
}
