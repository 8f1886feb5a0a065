use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ItemId, LoanId, MemberId};

/// イベント：資料が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLoaned {
    pub loan_id: LoanId,
    pub item_id: ItemId,
    pub title: String,
    pub kind: String,
    pub member_id: MemberId,
    pub loaned_at: DateTime<Utc>,
}

/// イベント：貸出中の資料への貸出要求が拒否された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRejected {
    pub item_id: ItemId,
    pub title: String,
    pub kind: String,
    pub member_id: MemberId,
}

/// イベント：資料が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReturned {
    pub loan_id: LoanId,
    pub item_id: ItemId,
    pub title: String,
    pub kind: String,
    pub member_id: MemberId,
    pub returned_at: DateTime<Utc>,
}

/// イベント：貸出されていない資料の返却要求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRejected {
    pub item_id: ItemId,
    pub title: String,
    pub member_id: MemberId,
}

/// 貸出イベント統合型
///
/// `Display`がイベントログへ書き出すメッセージ本文になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanEvent {
    ItemLoaned(ItemLoaned),
    LoanRejected(LoanRejected),
    ItemReturned(ItemReturned),
    ReturnRejected(ReturnRejected),
}

impl LoanEvent {
    pub fn item_id(&self) -> &ItemId {
        match self {
            LoanEvent::ItemLoaned(e) => &e.item_id,
            LoanEvent::LoanRejected(e) => &e.item_id,
            LoanEvent::ItemReturned(e) => &e.item_id,
            LoanEvent::ReturnRejected(e) => &e.item_id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoanEvent::ItemLoaned(_) | LoanEvent::ItemReturned(_))
    }
}

impl fmt::Display for LoanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanEvent::ItemLoaned(e) => write!(
                f,
                "Loan succeeded: {} borrowed '{}' ({})",
                e.member_id, e.title, e.kind
            ),
            LoanEvent::LoanRejected(e) => {
                write!(f, "Loan failed: {} '{}' is already on loan", e.kind, e.title)
            }
            LoanEvent::ItemReturned(e) => write!(
                f,
                "Return succeeded: {} returned '{}' ({})",
                e.member_id, e.title, e.kind
            ),
            LoanEvent::ReturnRejected(e) => write!(
                f,
                "Invalid return attempt by {} for item '{}'",
                e.member_id, e.title
            ),
        }
    }
}
