use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{BankAccount, CardTheme, CreditCard, FamilyMember, Goal, Transaction};

use super::FinanceStore;

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

impl FinanceStore {
    /// A store pre-filled with a small household: one member, one account,
    /// one card, one goal and a month of salary and groceries.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        let (Some(jan_1), Some(jan_15), Some(dec_31)) =
            (day(2026, 1, 1), day(2026, 1, 15), day(2026, 12, 31))
        else {
            return store;
        };

        let owner = store.add_family_member(FamilyMember::new("Carlos Siqueira", "owner"));
        let account = store.add_bank_account(BankAccount::new(
            "Conta Corrente Nubank",
            owner,
            amount(850_000),
        ));
        store.add_credit_card(
            CreditCard::new("Cartão Nubank", owner, amount(500_000))
                .with_billing_days(5, 15)
                .with_bill(amount(120_000))
                .with_theme(CardTheme::Black)
                .with_last_digits("1234"),
        );
        store.add_goal(
            Goal::new("Viagem para Europa", amount(1_000_000), dec_31).with_progress(amount(350_000)),
        );
        store.add_transaction(
            Transaction::expense(amount(15_000), "Supermercado", "Alimentação", jan_15, account)
                .with_member(owner)
                .settled(),
        );
        store.add_transaction(
            Transaction::income(amount(500_000), "Salário", "Salário", jan_1, account)
                .with_member(owner)
                .recurring()
                .settled(),
        );
        tracing::info!(
            transactions = store.transactions().len(),
            "sample finance data seeded"
        );
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sample_household_is_linked_to_its_owner() {
        let store = FinanceStore::with_sample_data();
        let owner = store.family_members()[0].id;
        assert_eq!(store.bank_accounts()[0].holder_id, owner);
        assert_eq!(store.credit_cards()[0].holder_id, owner);
        assert!(store.transactions().iter().all(|t| t.member_id == Some(owner)));
        assert_eq!(store.total_balance(), dec!(7300.00));
    }
}
