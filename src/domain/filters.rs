//! Global filter state and date intervals used by the derivation layer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::transaction::TransactionKind;

/// Closed date interval `[start, end]`.
///
/// A reversed interval is accepted and simply contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First day of `today`'s month through `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self::new(first_of_month(today), today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Optional bounds picked in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Both bounds, or `None` when either is open.
    pub fn as_period(&self) -> Option<Period> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(Period::new(start, end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionKind::Income,
            TypeFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// Filters shared by every transaction view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalFilters {
    pub selected_member: Option<Uuid>,
    pub date_range: DateRange,
    pub transaction_type: TypeFilter,
    pub search_text: String,
}

impl GlobalFilters {
    /// The dashboard's initial state: current month up to `today`, everything else open.
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            date_range: DateRange::new(Some(first_of_month(today)), Some(today)),
            ..Self::default()
        }
    }

    /// Resolves open bounds to the start of `today`'s month and `today`.
    pub fn period_or_default(&self, today: NaiveDate) -> Period {
        Period::new(
            self.date_range.start.unwrap_or_else(|| first_of_month(today)),
            self.date_range.end.unwrap_or(today),
        )
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.day0()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_bounds_are_inclusive() {
        let period = Period::new(date(2026, 1, 1), date(2026, 1, 31));
        assert!(period.contains(date(2026, 1, 1)));
        assert!(period.contains(date(2026, 1, 31)));
        assert!(!period.contains(date(2026, 2, 1)));
    }

    #[test]
    fn reversed_period_is_empty() {
        let period = Period::new(date(2026, 2, 1), date(2026, 1, 1));
        assert!(!period.contains(date(2026, 1, 15)));
    }

    #[test]
    fn month_to_date_starts_on_the_first() {
        let period = Period::month_to_date(date(2026, 3, 19));
        assert_eq!(period.start, date(2026, 3, 1));
        assert_eq!(period.end, date(2026, 3, 19));
    }

    #[test]
    fn open_range_has_no_period() {
        let range = DateRange::new(Some(date(2026, 1, 1)), None);
        assert!(range.as_period().is_none());
    }

    #[test]
    fn default_period_fills_missing_bounds() {
        let filters = GlobalFilters {
            date_range: DateRange::new(None, Some(date(2026, 5, 10))),
            ..GlobalFilters::default()
        };
        let period = filters.period_or_default(date(2026, 5, 20));
        assert_eq!(period, Period::new(date(2026, 5, 1), date(2026, 5, 10)));
    }
}
