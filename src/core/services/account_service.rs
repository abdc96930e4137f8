use uuid::Uuid;

use crate::core::finance_manager::FinanceManager;
use crate::core::forms::{BankAccountForm, CreditCardForm};
use crate::domain::{BankAccount, CreditCard, FamilyMember};
use crate::store::{FinanceStore, Stored};

use super::{ensure_exists, not_found, ServiceError, ServiceResult};

/// Bank accounts and credit cards: the two places a transaction can draw from.
pub struct AccountService;

impl AccountService {
    pub fn add_bank_account(
        manager: &mut FinanceManager,
        form: &BankAccountForm,
    ) -> ServiceResult<Uuid> {
        let account = form.validate()?;
        ensure_exists::<FamilyMember>(manager.store()?, account.holder_id)?;
        Ok(manager.add(account)?)
    }

    pub fn add_credit_card(
        manager: &mut FinanceManager,
        form: &CreditCardForm,
    ) -> ServiceResult<Uuid> {
        let card = form.validate()?;
        ensure_exists::<FamilyMember>(manager.store()?, card.holder_id)?;
        Ok(manager.add(card)?)
    }

    pub fn remove_bank_account(manager: &mut FinanceManager, id: Uuid) -> ServiceResult<()> {
        Self::remove::<BankAccount>(manager, id)
    }

    pub fn remove_credit_card(manager: &mut FinanceManager, id: Uuid) -> ServiceResult<()> {
        Self::remove::<CreditCard>(manager, id)
    }

    fn remove<T: Stored>(manager: &mut FinanceManager, id: Uuid) -> ServiceResult<()> {
        Self::ensure_unlinked(manager.store()?, id)?;
        if manager.delete::<T>(id)? {
            Ok(())
        } else {
            Err(not_found(T::COLLECTION, id))
        }
    }

    fn ensure_unlinked(store: &FinanceStore, id: Uuid) -> ServiceResult<()> {
        if store.transactions().iter().any(|txn| txn.account_id == id) {
            Err(ServiceError::Invalid(
                "Account has linked transactions".into(),
            ))
        } else {
            Ok(())
        }
    }
}
