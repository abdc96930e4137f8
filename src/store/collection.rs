use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Entity, Record};

/// Ordered list of records of one entity type with store-assigned identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCollection<T> {
    records: Vec<Record<T>>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Entity> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-stamped records, e.g. from a persisted snapshot.
    pub fn from_records(records: Vec<Record<T>>) -> Self {
        Self { records }
    }

    /// Appends `data` under a fresh identifier and returns it.
    pub fn insert(&mut self, data: T, now: DateTime<Utc>) -> Uuid {
        let mut id = Uuid::new_v4();
        while self.contains(id) {
            id = Uuid::new_v4();
        }
        self.records.push(Record::new(id, data, now));
        id
    }

    /// Merges `patch` into the record with `id`. Returns `false` when absent.
    pub fn update(&mut self, id: Uuid, patch: T::Patch, now: DateTime<Utc>) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.apply(patch, now);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`, returning it when present.
    pub fn remove(&mut self, id: Uuid) -> Option<Record<T>> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Record<T>> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Record<T>> {
        self.records.iter_mut().find(|record| record.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[Record<T>] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<T>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a Record<T>;
    type IntoIter = std::slice::Iter<'a, Record<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BankAccount, BankAccountPatch};
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn account(name: &str) -> BankAccount {
        BankAccount::new(name, Uuid::new_v4(), dec!(100))
    }

    #[test]
    fn insert_assigns_unique_ids_and_timestamps() {
        let mut accounts = EntityCollection::new();
        let now = Utc::now();
        let ids: HashSet<_> = (0..50)
            .map(|idx| accounts.insert(account(&format!("acc-{idx}")), now))
            .collect();
        assert_eq!(ids.len(), 50);
        let first = accounts.iter().next().unwrap();
        assert_eq!(first.created_at, now);
        assert_eq!(first.updated_at, now);
    }

    #[test]
    fn update_merges_and_bumps_timestamp() {
        let mut accounts = EntityCollection::new();
        let created = Utc::now();
        let id = accounts.insert(account("Checking"), created);
        let later = created + Duration::seconds(1);
        let changed = accounts.update(
            id,
            BankAccountPatch {
                balance: Some(dec!(42)),
                ..BankAccountPatch::default()
            },
            later,
        );
        assert!(changed);
        let record = accounts.get(id).unwrap();
        assert_eq!(record.balance, dec!(42));
        assert_eq!(record.name, "Checking");
        assert_eq!(record.updated_at, later);
        assert_eq!(record.created_at, created);
    }

    #[test]
    fn missing_ids_are_silent_noops() {
        let mut accounts = EntityCollection::new();
        accounts.insert(account("Checking"), Utc::now());
        let before = accounts.clone();
        assert!(!accounts.update(Uuid::new_v4(), BankAccountPatch::default(), Utc::now()));
        assert!(accounts.remove(Uuid::new_v4()).is_none());
        assert_eq!(accounts, before);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut accounts = EntityCollection::new();
        let now = Utc::now();
        let a = accounts.insert(account("a"), now);
        let b = accounts.insert(account("b"), now);
        let c = accounts.insert(account("c"), now);
        assert_eq!(accounts.remove(b).map(|r| r.id), Some(b));
        let remaining: Vec<_> = accounts.iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }
}
