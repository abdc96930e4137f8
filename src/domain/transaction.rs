use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{merge, Collection, Displayable, Entity};

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Cancelled,
}

/// Fields of a single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    /// Category name; free text, not checked against the seeded list.
    pub category: String,
    pub date: NaiveDate,
    pub account_id: Uuid,
    /// `None` marks a shared household entry.
    pub member_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_installment: Option<u32>,
    pub status: TransactionStatus,
    pub is_recurring: bool,
    pub is_paid: bool,
}

impl Transaction {
    /// Creates a pending, unpaid, non-recurring entry.
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        account_id: Uuid,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            category: category.into(),
            date,
            account_id,
            member_id: None,
            installments: None,
            current_installment: None,
            status: TransactionStatus::Pending,
            is_recurring: false,
            is_paid: false,
        }
    }

    pub fn income(
        amount: Decimal,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        account_id: Uuid,
    ) -> Self {
        Self::new(
            TransactionKind::Income,
            amount,
            description,
            category,
            date,
            account_id,
        )
    }

    pub fn expense(
        amount: Decimal,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        account_id: Uuid,
    ) -> Self {
        Self::new(
            TransactionKind::Expense,
            amount,
            description,
            category,
            date,
            account_id,
        )
    }

    pub fn with_member(mut self, member_id: Uuid) -> Self {
        self.member_id = Some(member_id);
        self
    }

    pub fn with_installments(mut self, total: u32, current: u32) -> Self {
        self.installments = Some(total);
        self.current_installment = Some(current);
        self
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    /// Marks the entry as settled.
    pub fn settled(mut self) -> Self {
        self.is_paid = true;
        self.status = TransactionStatus::Completed;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// An expense still awaiting payment.
    pub fn is_outstanding(&self) -> bool {
        self.is_expense() && !self.is_paid && self.status == TransactionStatus::Pending
    }

    /// True unless the current installment exceeds the installment count.
    pub fn installments_consistent(&self) -> bool {
        match (self.installments, self.current_installment) {
            (Some(total), Some(current)) => current <= total,
            _ => true,
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} [{} {}]", self.description, self.kind, self.amount)
    }
}

/// Partial update for [`Transaction`]. Nullable fields use a nested option so
/// they can be cleared with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub account_id: Option<Uuid>,
    pub member_id: Option<Option<Uuid>>,
    pub installments: Option<Option<u32>>,
    pub current_installment: Option<Option<u32>>,
    pub status: Option<TransactionStatus>,
    pub is_recurring: Option<bool>,
    pub is_paid: Option<bool>,
}

impl TransactionPatch {
    pub fn mark_paid() -> Self {
        Self {
            is_paid: Some(true),
            status: Some(TransactionStatus::Completed),
            ..Self::default()
        }
    }
}

impl Entity for Transaction {
    type Patch = TransactionPatch;

    const COLLECTION: Collection = Collection::Transactions;

    fn apply(&mut self, patch: TransactionPatch) {
        merge(&mut self.kind, patch.kind);
        merge(&mut self.amount, patch.amount);
        merge(&mut self.description, patch.description);
        merge(&mut self.category, patch.category);
        merge(&mut self.date, patch.date);
        merge(&mut self.account_id, patch.account_id);
        merge(&mut self.member_id, patch.member_id);
        merge(&mut self.installments, patch.installments);
        merge(&mut self.current_installment, patch.current_installment);
        merge(&mut self.status, patch.status);
        merge(&mut self.is_recurring, patch.is_recurring);
        merge(&mut self.is_paid, patch.is_paid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn groceries() -> Transaction {
        Transaction::expense(
            dec!(150.00),
            "Supermercado",
            "Alimentação",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            Uuid::new_v4(),
        )
    }

    #[test]
    fn patch_only_touches_provided_fields() {
        let mut txn = groceries().with_member(Uuid::new_v4());
        let before = txn.clone();
        txn.apply(TransactionPatch {
            amount: Some(dec!(175.50)),
            ..TransactionPatch::default()
        });
        assert_eq!(txn.amount, dec!(175.50));
        assert_eq!(txn.description, before.description);
        assert_eq!(txn.member_id, before.member_id);
    }

    #[test]
    fn nested_option_clears_member() {
        let mut txn = groceries().with_member(Uuid::new_v4());
        txn.apply(TransactionPatch {
            member_id: Some(None),
            ..TransactionPatch::default()
        });
        assert!(txn.member_id.is_none());
    }

    #[test]
    fn installment_consistency() {
        assert!(groceries().installments_consistent());
        assert!(groceries().with_installments(3, 3).installments_consistent());
        assert!(!groceries().with_installments(3, 4).installments_consistent());
    }

    #[test]
    fn serializes_kind_as_type_field() {
        let json = serde_json::to_value(groceries()).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["status"], "pending");
        assert!(json.get("installments").is_none());
    }
}
