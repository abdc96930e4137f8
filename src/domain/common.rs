use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Field set of a storable entity together with its partial-update type.
pub trait Entity: Clone {
    /// Partial update; every `None` leaves the matching field untouched.
    type Patch: Default;

    const COLLECTION: Collection;

    fn apply(&mut self, patch: Self::Patch);
}

/// Names the five mutable collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Transactions,
    Goals,
    CreditCards,
    BankAccounts,
    FamilyMembers,
}

impl Collection {
    pub fn singular(self) -> &'static str {
        match self {
            Collection::Transactions => "transaction",
            Collection::Goals => "goal",
            Collection::CreditCards => "credit card",
            Collection::BankAccounts => "bank account",
            Collection::FamilyMembers => "family member",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Collection::Transactions => "transactions",
            Collection::Goals => "goals",
            Collection::CreditCards => "credit_cards",
            Collection::BankAccounts => "bank_accounts",
            Collection::FamilyMembers => "family_members",
        };
        f.write_str(label)
    }
}

/// Overwrites `slot` when the patch carries a value.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
