use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    BankAccount, CreditCard, Period, Record, Transaction, TransactionKind,
};

/// Sum of account balances minus the sum of current card bills.
pub fn total_balance(accounts: &[Record<BankAccount>], cards: &[Record<CreditCard>]) -> Decimal {
    let balances: Decimal = accounts.iter().map(|account| account.balance).sum();
    let bills: Decimal = cards.iter().map(|card| card.current_bill).sum();
    balances - bills
}

/// Sum of amounts of `kind` transactions dated within `period`.
pub fn sum_for_period(
    transactions: &[Record<Transaction>],
    kind: TransactionKind,
    period: Period,
) -> Decimal {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind && period.contains(txn.date))
        .map(|txn| txn.amount)
        .sum()
}

pub fn income_for_period(transactions: &[Record<Transaction>], period: Period) -> Decimal {
    sum_for_period(transactions, TransactionKind::Income, period)
}

pub fn expenses_for_period(transactions: &[Record<Transaction>], period: Period) -> Decimal {
    sum_for_period(transactions, TransactionKind::Expense, period)
}

/// Expense totals keyed by category name. Categories without expenses are absent.
pub fn expenses_by_category(
    transactions: &[Record<Transaction>],
    period: Period,
) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for txn in transactions
        .iter()
        .filter(|txn| txn.is_expense() && period.contains(txn.date))
    {
        *totals.entry(txn.category.clone()).or_insert(Decimal::ZERO) += txn.amount;
    }
    totals
}

/// Headline figures for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

pub fn period_summary(
    transactions: &[Record<Transaction>],
    accounts: &[Record<BankAccount>],
    cards: &[Record<CreditCard>],
    period: Period,
) -> PeriodSummary {
    let income = income_for_period(transactions, period);
    let expenses = expenses_for_period(transactions, period);
    PeriodSummary {
        period,
        balance: total_balance(accounts, cards),
        income,
        expenses,
        net: income - expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn record<T>(data: T) -> Record<T> {
        Record::new(Uuid::new_v4(), data, Utc::now())
    }

    fn january() -> Period {
        Period::new(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        )
    }

    #[test]
    fn empty_collections_balance_to_zero() {
        assert_eq!(total_balance(&[], &[]), Decimal::ZERO);
    }

    #[test]
    fn balance_subtracts_card_bills() {
        let holder = Uuid::new_v4();
        let accounts = vec![
            record(BankAccount::new("Corrente", holder, dec!(8500.00))),
            record(BankAccount::new("Poupança", holder, dec!(500.00))),
        ];
        let cards = vec![record(
            CreditCard::new("Nubank", holder, dec!(5000)).with_bill(dec!(1200.00)),
        )];
        assert_eq!(total_balance(&accounts, &cards), dec!(7800.00));
        assert_eq!(total_balance(&[], &cards), dec!(-1200.00));
    }

    #[test]
    fn category_totals_accumulate() {
        let account = Uuid::new_v4();
        let day = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let txns = vec![
            record(Transaction::expense(dec!(10.25), "Pão", "Alimentação", day, account)),
            record(Transaction::expense(dec!(4.75), "Leite", "Alimentação", day, account)),
            record(Transaction::expense(dec!(30), "Ônibus", "Transporte", day, account)),
            record(Transaction::income(dec!(99), "Bônus", "Salário", day, account)),
        ];
        let totals = expenses_by_category(&txns, january());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Alimentação"], dec!(15.00));
        assert_eq!(totals["Transporte"], dec!(30));
    }

    #[test]
    fn summary_net_is_income_minus_expenses() {
        let account = Uuid::new_v4();
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let txns = vec![
            record(Transaction::income(dec!(1000), "Freela", "Salário", day, account)),
            record(Transaction::expense(dec!(250), "Luz", "Moradia", day, account)),
        ];
        let summary = period_summary(&txns, &[], &[], january());
        assert_eq!(summary.net, dec!(750));
        assert_eq!(summary.balance, Decimal::ZERO);
    }
}
