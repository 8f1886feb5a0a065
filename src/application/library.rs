use crate::domain::{Inventory, Item, ItemId, MemberId};

use super::loan::{LoanService, Result};

/// 図書館ファサード
///
/// 在庫と貸出サービスを束ねるだけで、独自のロジックは持たない。
pub struct Library {
    inventory: Inventory,
    loans: LoanService,
}

impl Library {
    pub fn new(inventory: Inventory, loans: LoanService) -> Self {
        Self { inventory, loans }
    }

    pub fn add_item(&mut self, item: Item) -> bool {
        self.inventory.add(item)
    }

    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        self.inventory.remove(id)
    }

    pub fn get_item(&self, id: &ItemId) -> Option<&Item> {
        self.inventory.get(id)
    }

    pub fn list_items(&self) -> Vec<&Item> {
        self.inventory.list()
    }

    pub fn render_inventory(&self) -> String {
        self.inventory.render()
    }

    /// IDで資料を探して貸し出す。在庫にないIDは`Ok(false)`。
    pub fn loan_item(&mut self, id: &ItemId, member: &MemberId) -> Result<bool> {
        match self.inventory.get_mut(id) {
            Some(item) => self.loans.loan(member, item),
            None => {
                tracing::warn!(item_id = %id, "Item is not available or does not exist");
                Ok(false)
            }
        }
    }

    pub fn return_item(&mut self, id: &ItemId, member: &MemberId) -> Result<bool> {
        match self.inventory.get_mut(id) {
            Some(item) => self.loans.return_item(member, item),
            None => {
                tracing::warn!(item_id = %id, "Item does not exist");
                Ok(false)
            }
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn loans(&self) -> &LoanService {
        &self.loans
    }
}
