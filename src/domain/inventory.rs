use std::collections::HashMap;
use std::fmt::Write as _;

use super::{Item, ItemId};

/// 在庫 - 資料IDから資料への対応表
///
/// 不変条件：格納されたすべての資料について、キーと資料のIDが一致する。
/// 在庫は資料を所有し、貸出サービスには`get_mut`で同じ資料を貸し渡す。
#[derive(Debug, Default)]
pub struct Inventory {
    items: HashMap<ItemId, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 資料を追加する
    ///
    /// 同じIDが既に存在する場合は何も変更せず`false`を返す。
    pub fn add(&mut self, item: Item) -> bool {
        if self.items.contains_key(item.id()) {
            tracing::warn!(item_id = %item.id(), "An item with this id already exists");
            return false;
        }

        tracing::info!(
            item_id = %item.id(),
            kind = item.kind_name(),
            title = item.title(),
            "Item added to inventory"
        );
        self.items.insert(item.id().clone(), item);
        true
    }

    /// 資料を削除する
    ///
    /// ビジネスルール: 貸出中の資料は削除できない。
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.items.get(id) else {
            tracing::warn!(item_id = %id, "Item does not exist");
            return false;
        };

        if !item.is_available() {
            tracing::warn!(item_id = %id, "Cannot remove an item that is on loan");
            return false;
        }

        if let Some(removed) = self.items.remove(id) {
            tracing::info!(item_id = %id, kind = removed.kind_name(), "Item removed from inventory");
        }
        true
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// 貸出サービスへ渡すための可変参照
    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    /// 存在しない資料は貸出不可として扱う
    pub fn is_available(&self, id: &ItemId) -> bool {
        self.items.get(id).is_some_and(Item::is_available)
    }

    /// 表示用のスナップショット（ID順）
    pub fn list(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.id().cmp(b.id()));
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 在庫一覧を表示用テキストに整形する
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "Inventory is empty.\n".to_string();
        }

        let mut out = String::from("Inventory:\n");
        for item in self.list() {
            // Stringへの書き込みは失敗しない
            let _ = writeln!(
                out,
                "{} - {} - {} - {}",
                item.id(),
                item.title(),
                item.kind_name(),
                item.status().as_str()
            );
        }
        out
    }
}
