pub mod account_service;
pub mod goal_service;
pub mod member_service;
pub mod summary_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use goal_service::GoalService;
pub use member_service::MemberService;
pub use summary_service::{DashboardSummary, SummaryService};
pub use transaction_service::TransactionService;

use uuid::Uuid;

use crate::domain::Collection;
use crate::errors::FinanceError;
use crate::store::{FinanceStore, Stored};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Finance(#[from] FinanceError),
    #[error("Fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{0}")]
    Invalid(String),
}

/// Fails with `NotFound` unless a `T` record with `id` exists.
pub(crate) fn ensure_exists<T: Stored>(store: &FinanceStore, id: Uuid) -> ServiceResult<()> {
    if store.get::<T>(id).is_some() {
        Ok(())
    } else {
        Err(not_found(T::COLLECTION, id))
    }
}

pub(crate) fn not_found(collection: Collection, id: Uuid) -> ServiceError {
    ServiceError::Finance(FinanceError::NotFound { collection, id })
}
