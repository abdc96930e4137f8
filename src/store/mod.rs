pub mod collection;
pub mod finance_store;
pub mod seed;
pub mod snapshot;

pub use collection::EntityCollection;
pub use finance_store::{FinanceStore, Stored};
pub use snapshot::{FinanceSnapshot, CURRENT_SCHEMA_VERSION};
