//! Pure read-only computations over store state.
//!
//! Every function re-scans the slices it is given; nothing is cached between calls.

pub mod dashboard;
pub mod filtering;
pub mod pagination;
pub mod totals;

pub use dashboard::{
    category_spending, daily_flow, member_label, upcoming_expenses, CategorySpending, DailyFlow,
    MemberLabel,
};
pub use filtering::filter_transactions;
pub use pagination::{paginate, Page};
pub use totals::{
    expenses_by_category, expenses_for_period, income_for_period, period_summary, total_balance,
    PeriodSummary,
};
