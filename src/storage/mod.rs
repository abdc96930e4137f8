pub mod json_backend;
pub mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::Collection, errors::Result, store::FinanceSnapshot, store::FinanceStore};

pub use json_backend::JsonRepository;
pub use memory::MemoryRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationOp {
    Added,
    Updated,
    Deleted,
}

impl fmt::Display for MutationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MutationOp::Added => "added",
            MutationOp::Updated => "updated",
            MutationOp::Deleted => "deleted",
        })
    }
}

/// One effective change applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    pub collection: Collection,
    pub id: Uuid,
    pub op: MutationOp,
}

impl Mutation {
    pub fn new(collection: Collection, id: Uuid, op: MutationOp) -> Self {
        Self { collection, id, op }
    }
}

/// Abstraction over backing stores for the finance collections.
///
/// `load` runs once when the manager initializes; `write_through` runs after
/// every mutation that changed the store, with the store already updated.
pub trait FinanceRepository: Send + Sync {
    fn load(&self) -> Result<Option<FinanceSnapshot>>;
    fn write_through(&self, mutation: &Mutation, store: &FinanceStore) -> Result<()>;

    /// Short backend name used in logs.
    fn describe(&self) -> String {
        "repository".into()
    }
}

/// Lets callers keep a handle on a repository they hand to the manager.
impl<R: FinanceRepository + ?Sized> FinanceRepository for std::sync::Arc<R> {
    fn load(&self) -> Result<Option<FinanceSnapshot>> {
        (**self).load()
    }

    fn write_through(&self, mutation: &Mutation, store: &FinanceStore) -> Result<()> {
        (**self).write_through(mutation, store)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
