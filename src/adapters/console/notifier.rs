use crate::domain::value_objects::MemberId;
use crate::ports::notifier::{Notifier, Result};

/// メール通知（標準出力へ書き出す）
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, recipient: &MemberId, message: &str) -> Result<()> {
        println!("[EMAIL to {}] {}", recipient, message);
        Ok(())
    }
}

/// SMS通知（標準出力へ書き出す）
#[derive(Debug, Default, Clone, Copy)]
pub struct SmsNotifier;

impl SmsNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for SmsNotifier {
    fn send(&self, recipient: &MemberId, message: &str) -> Result<()> {
        println!("[SMS to {}] {}", recipient, message);
        Ok(())
    }
}
