use std::sync::{Mutex, MutexGuard};

use crate::errors::{FinanceError, Result};
use crate::store::{FinanceSnapshot, FinanceStore};

use super::{FinanceRepository, Mutation};

/// Volatile repository: nothing survives the process.
///
/// It can hand out a seed snapshot on load and keeps a journal of every
/// mutation it was told about.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    seed: Option<FinanceSnapshot>,
    journal: Mutex<Vec<Mutation>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(snapshot: FinanceSnapshot) -> Self {
        Self {
            seed: Some(snapshot),
            journal: Mutex::new(Vec::new()),
        }
    }

    /// Mutations recorded so far, oldest first.
    pub fn journal(&self) -> Result<Vec<Mutation>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Mutation>>> {
        self.journal
            .lock()
            .map_err(|_| FinanceError::Storage("mutation journal lock poisoned".into()))
    }
}

impl FinanceRepository for MemoryRepository {
    fn load(&self) -> Result<Option<FinanceSnapshot>> {
        Ok(self.seed.clone())
    }

    fn write_through(&self, mutation: &Mutation, _store: &FinanceStore) -> Result<()> {
        self.lock()?.push(*mutation);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Collection;
    use crate::storage::MutationOp;
    use uuid::Uuid;

    #[test]
    fn journal_keeps_order() {
        let repo = MemoryRepository::new();
        let store = FinanceStore::new();
        let first = Mutation::new(Collection::Goals, Uuid::new_v4(), MutationOp::Added);
        let second = Mutation::new(Collection::Goals, first.id, MutationOp::Deleted);
        repo.write_through(&first, &store).unwrap();
        repo.write_through(&second, &store).unwrap();
        assert_eq!(repo.journal().unwrap(), vec![first, second]);
    }

    #[test]
    fn load_returns_seed() {
        assert!(MemoryRepository::new().load().unwrap().is_none());
        let seeded = MemoryRepository::with_seed(FinanceStore::with_sample_data().snapshot());
        assert_eq!(seeded.load().unwrap().unwrap().family_members.len(), 1);
    }
}
