use crate::domain::{
    Item, ItemId, ItemLoaned, ItemReturned, LoanEvent, LoanId, LoanRejected, MemberId,
    ReturnRejected,
};
use crate::ports::*;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use super::errors::{LoanApplicationError, Result};

/// サービスの依存関係
///
/// 通知と記録の実装は呼び出し側が明示的に注入する。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub notifier: Arc<dyn Notifier>,
    pub event_logger: Arc<dyn EventLogger>,
}

/// 貸出中レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLoan {
    pub loan_id: LoanId,
    pub member_id: MemberId,
    pub loaned_at: DateTime<Utc>,
}

/// 貸出サービス
///
/// 資料ごとの状態機械 `Available` ⇄ `Loaned(member)` を管理する。
///
/// 不変条件：資料IDが`loans`に存在する ⇔ その資料の`available`がfalse
/// （このサービスを経由した資料について）。
///
/// 資料は所有しない。呼び出し側（在庫）から渡された資料の`available`を
/// 書き換えるだけで、資料がどの在庫に属するかは検証しない。
pub struct LoanService {
    deps: ServiceDependencies,
    loans: HashMap<ItemId, ActiveLoan>,
}

impl LoanService {
    pub fn new(notifier: Arc<dyn Notifier>, event_logger: Arc<dyn EventLogger>) -> Self {
        Self::with_dependencies(ServiceDependencies {
            notifier,
            event_logger,
        })
    }

    pub fn with_dependencies(deps: ServiceDependencies) -> Self {
        Self {
            deps,
            loans: HashMap::new(),
        }
    }

    /// 資料を貸し出す
    ///
    /// ビジネスルール：
    /// - 貸出可能な資料のみ貸し出せる
    /// - 貸出中の資料への要求は失敗イベントを記録して`Ok(false)`（状態は変えない、通知もしない）
    ///
    /// 成功時は状態を更新してから会員へ通知し、成功イベントを記録する。
    ///
    /// # エラー
    /// 通知・記録の失敗。状態の更新は巻き戻さない。
    pub fn loan(&mut self, member: &MemberId, item: &mut Item) -> Result<bool> {
        if !item.is_available() {
            tracing::warn!(item_id = %item.id(), member = %member, "Item is already on loan");
            self.record(LoanEvent::LoanRejected(LoanRejected {
                item_id: item.id().clone(),
                title: item.title().to_string(),
                kind: item.kind_name().to_string(),
                member_id: member.clone(),
            }))?;
            return Ok(false);
        }

        let loaned_at = Utc::now();
        let loan_id = LoanId::new();

        item.mark_loaned();
        self.loans.insert(
            item.id().clone(),
            ActiveLoan {
                loan_id,
                member_id: member.clone(),
                loaned_at,
            },
        );
        tracing::info!(%loan_id, item_id = %item.id(), member = %member, "Item loaned");

        self.notify(member, &format!("You borrowed: {}", item.title()))?;
        self.record(LoanEvent::ItemLoaned(ItemLoaned {
            loan_id,
            item_id: item.id().clone(),
            title: item.title().to_string(),
            kind: item.kind_name().to_string(),
            member_id: member.clone(),
            loaned_at,
        }))?;

        Ok(true)
    }

    /// 資料を返却する
    ///
    /// ビジネスルール：
    /// - 貸出中の資料のみ返却できる。そうでなければ不正な返却としてイベントを記録し`Ok(false)`
    /// - 返却者が借りた会員と一致するかは検証しない（誰でも返却できる）
    ///
    /// # エラー
    /// 通知・記録の失敗。状態の更新は巻き戻さない。
    pub fn return_item(&mut self, member: &MemberId, item: &mut Item) -> Result<bool> {
        let Some(active) = self.loans.remove(item.id()) else {
            tracing::warn!(item_id = %item.id(), member = %member, "Item was not on loan");
            self.record(LoanEvent::ReturnRejected(ReturnRejected {
                item_id: item.id().clone(),
                title: item.title().to_string(),
                member_id: member.clone(),
            }))?;
            return Ok(false);
        };

        if active.member_id != *member {
            tracing::debug!(
                item_id = %item.id(),
                borrower = %active.member_id,
                returned_by = %member,
                "Item returned by a member other than the borrower"
            );
        }

        item.mark_returned();
        tracing::info!(loan_id = %active.loan_id, item_id = %item.id(), member = %member, "Item returned");

        self.notify(member, &format!("You returned: {}", item.title()))?;
        self.record(LoanEvent::ItemReturned(ItemReturned {
            loan_id: active.loan_id,
            item_id: item.id().clone(),
            title: item.title().to_string(),
            kind: item.kind_name().to_string(),
            member_id: member.clone(),
            returned_at: Utc::now(),
        }))?;

        Ok(true)
    }

    /// 貸出中の資料の借り手
    pub fn borrower_of(&self, item_id: &ItemId) -> Option<&MemberId> {
        self.loans.get(item_id).map(|loan| &loan.member_id)
    }

    pub fn active_loan(&self, item_id: &ItemId) -> Option<&ActiveLoan> {
        self.loans.get(item_id)
    }

    pub fn is_loaned(&self, item_id: &ItemId) -> bool {
        self.loans.contains_key(item_id)
    }

    /// 貸出中の件数
    pub fn active_loans(&self) -> usize {
        self.loans.len()
    }

    fn notify(&self, member: &MemberId, message: &str) -> Result<()> {
        self.deps
            .notifier
            .send(member, message)
            .map_err(LoanApplicationError::NotificationError)
    }

    fn record(&self, event: LoanEvent) -> Result<()> {
        self.deps
            .event_logger
            .record(&event.to_string())
            .map_err(LoanApplicationError::EventLogError)
    }
}
