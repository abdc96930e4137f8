use uuid::Uuid;

use crate::domain::{Entity, GlobalFilters, Transaction, TransactionPatch};
use crate::errors::{FinanceError, Result};
use crate::storage::{FinanceRepository, MemoryRepository, Mutation, MutationOp};
use crate::store::{FinanceStore, Stored};

/// Outcome of [`FinanceManager::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: String,
    pub schema_version: u8,
    pub records: usize,
    /// True when the repository was empty and the store started fresh.
    pub fresh: bool,
}

/// Facade that owns the finance store and forwards every effective mutation
/// to the repository.
///
/// This is the handle presentation code receives. Until [`load`](Self::load)
/// or [`provide`](Self::provide) has run, every accessor returns
/// [`FinanceError::NotInitialized`].
pub struct FinanceManager {
    current: Option<FinanceStore>,
    repository: Box<dyn FinanceRepository>,
}

impl FinanceManager {
    pub fn new(repository: Box<dyn FinanceRepository>) -> Self {
        Self {
            current: None,
            repository,
        }
    }

    /// Manager over a volatile repository.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryRepository::new()))
    }

    pub fn repository(&self) -> &dyn FinanceRepository {
        self.repository.as_ref()
    }

    /// Bulk-loads the repository. An empty repository yields an empty store,
    /// or the sample household when `seed_sample_data` is set. A snapshot
    /// that repeats an id within a collection is refused and nothing is
    /// installed.
    pub fn load(&mut self, seed_sample_data: bool) -> Result<LoadReport> {
        let source = self.repository.describe();
        let report = match self.repository.load()? {
            Some(snapshot) => {
                snapshot.ensure_unique_ids()?;
                let report = LoadReport {
                    source,
                    schema_version: snapshot.schema_version,
                    records: snapshot.record_count(),
                    fresh: false,
                };
                self.current = Some(FinanceStore::from_snapshot(snapshot));
                report
            }
            None => {
                let store = if seed_sample_data {
                    FinanceStore::with_sample_data()
                } else {
                    FinanceStore::new()
                };
                let snapshot = store.snapshot();
                self.current = Some(store);
                LoadReport {
                    source,
                    schema_version: snapshot.schema_version,
                    records: snapshot.record_count(),
                    fresh: true,
                }
            }
        };
        tracing::info!(
            source = %report.source,
            records = report.records,
            fresh = report.fresh,
            "finance store loaded"
        );
        Ok(report)
    }

    /// Installs an already-built store, replacing any current one.
    pub fn provide(&mut self, store: FinanceStore) {
        self.current = Some(store);
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    pub fn store(&self) -> Result<&FinanceStore> {
        self.current.as_ref().ok_or(FinanceError::NotInitialized)
    }

    fn store_mut(&mut self) -> Result<&mut FinanceStore> {
        self.current.as_mut().ok_or(FinanceError::NotInitialized)
    }

    pub fn add<T: Stored>(&mut self, data: T) -> Result<Uuid> {
        let id = self.store_mut()?.add(data);
        self.write_through(Mutation::new(T::COLLECTION, id, MutationOp::Added))?;
        Ok(id)
    }

    /// Returns `Ok(false)` without touching the repository when `id` is unknown.
    pub fn update<T: Stored>(&mut self, id: Uuid, patch: <T as Entity>::Patch) -> Result<bool> {
        let changed = self.store_mut()?.update::<T>(id, patch);
        if changed {
            self.write_through(Mutation::new(T::COLLECTION, id, MutationOp::Updated))?;
        }
        Ok(changed)
    }

    /// Returns `Ok(false)` without touching the repository when `id` is unknown.
    pub fn delete<T: Stored>(&mut self, id: Uuid) -> Result<bool> {
        let removed = self.store_mut()?.delete::<T>(id);
        if removed {
            self.write_through(Mutation::new(T::COLLECTION, id, MutationOp::Deleted))?;
        }
        Ok(removed)
    }

    pub fn mark_transaction_paid(&mut self, id: Uuid) -> Result<bool> {
        self.update::<Transaction>(id, TransactionPatch::mark_paid())
    }

    pub fn set_filters(&mut self, filters: GlobalFilters) -> Result<()> {
        self.store_mut()?.set_filters(filters);
        Ok(())
    }

    pub fn update_filters<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut GlobalFilters),
    {
        self.store_mut()?.update_filters(edit);
        Ok(())
    }

    fn write_through(&self, mutation: Mutation) -> Result<()> {
        let store = self.store()?;
        self.repository
            .write_through(&mutation, store)
            .map_err(|err| {
                tracing::error!(
                    collection = %mutation.collection,
                    id = %mutation.id,
                    op = %mutation.op,
                    error = %err,
                    "write-through failed; in-memory change kept"
                );
                err
            })
    }
}
