pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// イベント記録ポート
///
/// 貸出・返却の記録先（ファイル、コンソールなど）を抽象化する。
pub trait EventLogger: Send + Sync {
    /// イベントメッセージを1件記録する
    ///
    /// 記録先のI/Oエラーはそのまま呼び出し元へ返す。
    fn record(&self, message: &str) -> Result<()>;
}
