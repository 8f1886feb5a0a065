use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::adapters::console::{ConsoleEventLogger, EmailNotifier, SmsNotifier};
use crate::adapters::file::{DEFAULT_LOG_FILE, FileEventLogger};
use crate::ports::{EventLogger, Notifier};

pub const NOTIFIER_ENV: &str = "LIBRARY_NOTIFIER";
pub const EVENT_LOG_ENV: &str = "LIBRARY_EVENT_LOG";
pub const LOG_FILE_ENV: &str = "LIBRARY_LOG_FILE";

/// 設定エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: {message}")]
    InvalidValue {
        variable: &'static str,
        message: String,
    },
}

/// 通知チャネルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    #[default]
    Email,
    Sms,
}

impl NotifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifierKind::Email => "email",
            NotifierKind::Sms => "sms",
        }
    }
}

impl std::str::FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "email" => Ok(NotifierKind::Email),
            "sms" => Ok(NotifierKind::Sms),
            _ => Err(format!("Invalid notifier: {}", s)),
        }
    }
}

/// イベント記録先の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventLogKind {
    #[default]
    File,
    Console,
}

impl EventLogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLogKind::File => "file",
            EventLogKind::Console => "console",
        }
    }
}

impl std::str::FromStr for EventLogKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "file" => Ok(EventLogKind::File),
            "console" => Ok(EventLogKind::Console),
            _ => Err(format!("Invalid event log: {}", s)),
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub notifier: NotifierKind,
    pub event_log: EventLogKind,
    pub log_path: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            notifier: NotifierKind::default(),
            event_log: EventLogKind::default(),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LibraryConfig {
    /// 環境変数から読み込む。未設定の項目は既定値。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む（テストでは環境変数を汚さずに済む）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let notifier = match lookup(NOTIFIER_ENV) {
            Some(value) => value
                .trim()
                .to_ascii_lowercase()
                .parse::<NotifierKind>()
                .map_err(|message| ConfigError::InvalidValue {
                    variable: NOTIFIER_ENV,
                    message,
                })?,
            None => defaults.notifier,
        };

        let event_log = match lookup(EVENT_LOG_ENV) {
            Some(value) => value
                .trim()
                .to_ascii_lowercase()
                .parse::<EventLogKind>()
                .map_err(|message| ConfigError::InvalidValue {
                    variable: EVENT_LOG_ENV,
                    message,
                })?,
            None => defaults.event_log,
        };

        let log_path = lookup(LOG_FILE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);

        Ok(Self {
            notifier,
            event_log,
            log_path,
        })
    }

    pub fn build_notifier(&self) -> Arc<dyn Notifier> {
        match self.notifier {
            NotifierKind::Email => Arc::new(EmailNotifier::new()),
            NotifierKind::Sms => Arc::new(SmsNotifier::new()),
        }
    }

    pub fn build_event_logger(&self) -> Arc<dyn EventLogger> {
        match self.event_log {
            EventLogKind::File => Arc::new(FileEventLogger::new(self.log_path.clone())),
            EventLogKind::Console => Arc::new(ConsoleEventLogger::new()),
        }
    }
}
