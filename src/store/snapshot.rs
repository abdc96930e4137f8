use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{BankAccount, CreditCard, Entity, FamilyMember, Goal, Record, Transaction};
use crate::errors::{FinanceError, Result};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Serializable copy of the five mutable collections.
///
/// Categories and filters are not part of it: categories are seeded and
/// filters are view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    #[serde(default = "FinanceSnapshot::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub transactions: Vec<Record<Transaction>>,
    #[serde(default)]
    pub goals: Vec<Record<Goal>>,
    #[serde(default)]
    pub credit_cards: Vec<Record<CreditCard>>,
    #[serde(default)]
    pub bank_accounts: Vec<Record<BankAccount>>,
    #[serde(default)]
    pub family_members: Vec<Record<FamilyMember>>,
}

impl FinanceSnapshot {
    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    pub fn record_count(&self) -> usize {
        self.transactions.len()
            + self.goals.len()
            + self.credit_cards.len()
            + self.bank_accounts.len()
            + self.family_members.len()
    }

    /// Rejects a snapshot where two records of one collection share an id.
    pub fn ensure_unique_ids(&self) -> Result<()> {
        unique_ids(&self.transactions)?;
        unique_ids(&self.goals)?;
        unique_ids(&self.credit_cards)?;
        unique_ids(&self.bank_accounts)?;
        unique_ids(&self.family_members)
    }
}

fn unique_ids<T: Entity>(records: &[Record<T>]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    match records.iter().find(|record| !seen.insert(record.id)) {
        Some(record) => Err(FinanceError::Storage(format!(
            "duplicate id {} in {}",
            record.id,
            T::COLLECTION
        ))),
        None => Ok(()),
    }
}

impl Default for FinanceSnapshot {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            transactions: Vec::new(),
            goals: Vec::new(),
            credit_cards: Vec::new(),
            bank_accounts: Vec::new(),
            family_members: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FinanceStore;

    #[test]
    fn sample_snapshot_has_unique_ids() {
        assert!(FinanceStore::with_sample_data().snapshot().ensure_unique_ids().is_ok());
        assert!(FinanceSnapshot::default().ensure_unique_ids().is_ok());
    }

    #[test]
    fn repeated_id_names_collection_and_id() {
        let mut snapshot = FinanceStore::with_sample_data().snapshot();
        let twin = snapshot.goals[0].clone();
        let id = twin.id;
        snapshot.goals.push(twin);

        match snapshot.ensure_unique_ids() {
            Err(FinanceError::Storage(msg)) => {
                assert!(msg.contains("goals"), "{msg}");
                assert!(msg.contains(&id.to_string()), "{msg}");
            }
            other => panic!("expected a storage error, got {other:?}"),
        }
    }
}
