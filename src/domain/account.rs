use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{merge, Collection, Displayable, Entity, NamedEntity};

/// Represents a bank account held by a family member.
///
/// The balance is maintained independently from the transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub name: String,
    pub holder_id: Uuid,
    pub balance: Decimal,
}

impl BankAccount {
    pub fn new(name: impl Into<String>, holder_id: Uuid, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            holder_id,
            balance,
        }
    }
}

impl NamedEntity for BankAccount {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for BankAccount {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.balance)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankAccountPatch {
    pub name: Option<String>,
    pub holder_id: Option<Uuid>,
    pub balance: Option<Decimal>,
}

impl Entity for BankAccount {
    type Patch = BankAccountPatch;

    const COLLECTION: Collection = Collection::BankAccounts;

    fn apply(&mut self, patch: BankAccountPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.holder_id, patch.holder_id);
        merge(&mut self.balance, patch.balance);
    }
}
