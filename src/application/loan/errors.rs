use thiserror::Error;

/// 貸出管理アプリケーション層のエラー
///
/// 貸出中の資料の再貸出や未貸出資料の返却などの業務上の拒否はエラーではなく
/// `Ok(false)`で表す。ここに来るのは副作用チャネルの障害のみ。
#[derive(Debug, Error)]
pub enum LoanApplicationError {
    /// Notifierのエラー
    #[error("Notification error")]
    NotificationError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// EventLoggerのエラー（権限不足、ディスクフルなど）
    #[error("Event log error")]
    EventLogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LoanApplicationError>;
