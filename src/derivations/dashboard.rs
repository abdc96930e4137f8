//! Views behind the dashboard widgets.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::derivations::totals::expenses_by_category;
use crate::domain::{Category, FamilyMember, Period, Record, Transaction, TransactionKind};

/// Unpaid pending expenses, soonest first, at most `limit` entries.
pub fn upcoming_expenses(
    transactions: &[Record<Transaction>],
    limit: usize,
) -> Vec<&Record<Transaction>> {
    let mut pending: Vec<_> = transactions
        .iter()
        .filter(|txn| txn.is_outstanding())
        .collect();
    pending.sort_by_key(|txn| txn.date);
    pending.truncate(limit);
    pending
}

/// Income and expense totals for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Per-day cash flow inside `period`, ascending by date; idle days are omitted.
pub fn daily_flow(transactions: &[Record<Transaction>], period: Period) -> Vec<DailyFlow> {
    let mut days: BTreeMap<NaiveDate, DailyFlow> = BTreeMap::new();
    for txn in transactions.iter().filter(|txn| period.contains(txn.date)) {
        let day = days.entry(txn.date).or_insert(DailyFlow {
            date: txn.date,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        });
        match txn.kind {
            TransactionKind::Income => day.income += txn.amount,
            TransactionKind::Expense => day.expenses += txn.amount,
        }
    }
    days.into_values().collect()
}

/// One slice of the spending-by-category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpending {
    pub name: String,
    pub total: Decimal,
    /// Share of the plotted slices' total, in percent.
    pub share: Decimal,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Spending for each seeded expense category, largest first, zero totals dropped.
///
/// Shares are taken over the plotted slices only: expenses filed under names
/// outside the seeded list, and categories whose total is not positive, are
/// left out of the denominator.
pub fn category_spending(
    transactions: &[Record<Transaction>],
    categories: &[Category],
    period: Period,
) -> Vec<CategorySpending> {
    let totals = expenses_by_category(transactions, period);

    let plotted: Vec<_> = categories
        .iter()
        .filter(|category| category.kind == TransactionKind::Expense)
        .filter_map(|category| {
            let total = totals.get(&category.name).copied()?;
            (total > Decimal::ZERO).then_some((category, total))
        })
        .collect();
    let plotted_sum: Decimal = plotted.iter().map(|(_, total)| *total).sum();

    let mut slices: Vec<_> = plotted
        .into_iter()
        .map(|(category, total)| CategorySpending {
            name: category.name.clone(),
            total,
            share: (total * Decimal::ONE_HUNDRED / plotted_sum).round_dp(2),
            color: category.color.clone(),
            icon: category.icon.clone(),
        })
        .collect();

    slices.sort_by(|a, b| b.total.cmp(&a.total));
    slices
}

/// Who a transaction, card or account is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberLabel<'a> {
    /// No member: a shared household entry.
    Shared,
    Named(&'a str),
    /// The referenced member no longer exists.
    Unknown,
}

pub fn member_label(members: &[Record<FamilyMember>], member_id: Option<Uuid>) -> MemberLabel<'_> {
    match member_id {
        None => MemberLabel::Shared,
        Some(id) => members
            .iter()
            .find(|member| member.id == id)
            .map_or(MemberLabel::Unknown, |member| MemberLabel::Named(&member.name)),
    }
}
