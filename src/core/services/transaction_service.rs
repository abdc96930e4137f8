//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::core::finance_manager::FinanceManager;
use crate::core::forms::TransactionForm;
use crate::core::services::{ensure_exists, not_found, ServiceError, ServiceResult};
use crate::domain::{BankAccount, Collection, CreditCard, FamilyMember, Transaction};

/// Validated entry points for recording and settling transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates the form and records a pending transaction.
    ///
    /// The form's account may name either a bank account or a credit card.
    pub fn submit(manager: &mut FinanceManager, form: &TransactionForm) -> ServiceResult<Uuid> {
        let transaction = form.validate()?;
        let store = manager.store()?;
        let known_account = store.get::<BankAccount>(transaction.account_id).is_some()
            || store.get::<CreditCard>(transaction.account_id).is_some();
        if !known_account {
            return Err(ServiceError::Invalid(
                "Selected account or card does not exist".into(),
            ));
        }
        if let Some(member_id) = transaction.member_id {
            ensure_exists::<FamilyMember>(store, member_id)?;
        }
        let id = manager.add(transaction)?;
        Ok(id)
    }

    /// Settles the transaction: paid and completed.
    pub fn mark_paid(manager: &mut FinanceManager, id: Uuid) -> ServiceResult<()> {
        if manager.mark_transaction_paid(id)? {
            Ok(())
        } else {
            Err(not_found(Collection::Transactions, id))
        }
    }

    pub fn remove(manager: &mut FinanceManager, id: Uuid) -> ServiceResult<()> {
        if manager.delete::<Transaction>(id)? {
            Ok(())
        } else {
            Err(not_found(Collection::Transactions, id))
        }
    }
}
