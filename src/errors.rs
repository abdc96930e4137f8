use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::Collection;

/// Unified error type for the store, persistence and configuration layers.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Finance store not initialized: call FinanceManager::load or FinanceManager::provide first")]
    NotInitialized,
    #[error("{} not found: {id}", .collection.singular())]
    NotFound { collection: Collection, id: Uuid },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Unsupported snapshot schema version {found} (latest supported: {supported})")]
    UnsupportedSchema { found: u8, supported: u8 },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let id = Uuid::nil();
        let err = FinanceError::NotFound {
            collection: Collection::BankAccounts,
            id,
        };
        assert_eq!(err.to_string(), format!("bank account not found: {id}"));
    }

    #[test]
    fn io_errors_map_to_storage() {
        let err: FinanceError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, FinanceError::Storage(ref message) if message.contains("disk full")));
    }
}
