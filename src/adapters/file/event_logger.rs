use crate::ports::event_logger::{EventLogger, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// ログファイルの既定パス
pub const DEFAULT_LOG_FILE: &str = "library_log.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ファイル追記型のイベントロガー
///
/// 1件ごとに open → 追記 → close を行う。バッファリング、ローテーション、
/// サイズ上限はない。I/Oエラーは呼び出し元へそのまま返す。
#[derive(Debug, Clone)]
pub struct FileEventLogger {
    path: PathBuf,
}

impl FileEventLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `[YYYY-MM-DD HH:MM:SS] message` 形式の1行を作る
    pub fn format_line<Tz: TimeZone>(timestamp: &DateTime<Tz>, message: &str) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("[{}] {}\n", timestamp.format(TIMESTAMP_FORMAT), message)
    }
}

impl Default for FileEventLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl EventLogger for FileEventLogger {
    fn record(&self, message: &str) -> Result<()> {
        let line = Self::format_line(&Local::now(), message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        tracing::debug!(path = %self.path.display(), "Event recorded in log file");
        Ok(())
    }
}
