use serde::{Deserialize, Serialize};

use super::ItemId;

/// 資料の種別ごとの固有フィールド
///
/// 種別は閉じた集合（書籍・雑誌）。継承ではなくタグ付きバリアントで表現する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Book { author: String },
    Magazine { issue: u32 },
}

impl ItemKind {
    /// 表示用の種別名
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Magazine { .. } => "Magazine",
        }
    }
}

/// 資料の貸出状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    Loaned,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::Loaned => "Loaned",
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Available" | "available" => Ok(ItemStatus::Available),
            "Loaned" | "loaned" => Ok(ItemStatus::Loaned),
            _ => Err(format!("Invalid item status: {}", s)),
        }
    }
}

fn available_on_creation() -> bool {
    true
}

/// 資料（書籍または雑誌）
///
/// 不変条件：
/// - IDは作成後に変更できない
/// - `available`は作成時true、以後は貸出サービスのみが切り替える
///
/// デシリアライズ時も`available`は入力を無視してtrueになる。
/// 貸出状態は貸出サービスの記録とだけ対応する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    #[serde(skip_deserializing, default = "available_on_creation")]
    available: bool,
    #[serde(flatten)]
    kind: ItemKind,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            available: true,
            kind,
        }
    }

    pub fn book(id: impl Into<ItemId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(
            id,
            title,
            ItemKind::Book {
                author: author.into(),
            },
        )
    }

    pub fn magazine(id: impl Into<ItemId>, title: impl Into<String>, issue: u32) -> Self {
        Self::new(id, title, ItemKind::Magazine { issue })
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status(&self) -> ItemStatus {
        if self.available {
            ItemStatus::Available
        } else {
            ItemStatus::Loaned
        }
    }

    pub(crate) fn mark_loaned(&mut self) {
        self.available = false;
    }

    pub(crate) fn mark_returned(&mut self) {
        self.available = true;
    }
}
