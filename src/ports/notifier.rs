use crate::domain::value_objects::MemberId;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知ポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 実装はメール、SMSなど。どの実装も差し替え可能。
pub trait Notifier: Send + Sync {
    /// 会員にメッセージを送る
    ///
    /// 貸出・返却が成功した時に呼ばれる。
    fn send(&self, recipient: &MemberId, message: &str) -> Result<()>;
}
