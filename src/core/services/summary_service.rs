use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::config::Config;
use crate::derivations::{CategorySpending, DailyFlow, Page, PeriodSummary};
use crate::domain::{CreditCard, Goal, Period, Record, Transaction};
use crate::store::FinanceStore;

use super::{ServiceError, ServiceResult};

/// Everything the dashboard shows for one period.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary<'a> {
    pub totals: PeriodSummary,
    pub categories: Vec<CategorySpending>,
    pub daily: Vec<DailyFlow>,
    pub upcoming: Vec<&'a Record<Transaction>>,
    pub cards: &'a [Record<CreditCard>],
    pub goals: &'a [Record<Goal>],
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard<'a>(
        store: &'a FinanceStore,
        config: &Config,
        period: Period,
    ) -> DashboardSummary<'a> {
        DashboardSummary {
            totals: store.period_summary(period),
            categories: store.category_spending(period),
            daily: store.daily_flow(period),
            upcoming: store.upcoming_expenses(config.upcoming_limit),
            cards: store.credit_cards(),
            goals: store.goals(),
        }
    }

    /// One page of the filtered transaction list, sized by the config.
    pub fn transactions_page<'a>(
        store: &'a FinanceStore,
        config: &Config,
        page: usize,
    ) -> Page<&'a Record<Transaction>> {
        store.filtered_page(page, config.page_size)
    }

    /// Parses `YYYY-MM` into the full calendar month.
    pub fn month_period(raw: &str) -> ServiceResult<Period> {
        let invalid = || ServiceError::Invalid(format!("expected a month as YYYY-MM, got `{raw}`"));
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next = if start.month() == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next.and_then(|date| date.pred_opt()).ok_or_else(invalid)?;
        Ok(Period::new(start, end))
    }
}
