use crate::domain::{GlobalFilters, Record, Transaction};

/// Applies member, type, date and text filters, then orders by date, newest first.
///
/// The date filter only applies when both bounds are set. Entries sharing a
/// date keep their insertion order.
pub fn filter_transactions<'a>(
    transactions: &'a [Record<Transaction>],
    filters: &GlobalFilters,
) -> Vec<&'a Record<Transaction>> {
    let period = filters.date_range.as_period();
    let needle = filters.search_text.to_lowercase();

    let mut filtered: Vec<_> = transactions
        .iter()
        .filter(|txn| {
            filters
                .selected_member
                .map_or(true, |member| txn.member_id == Some(member))
        })
        .filter(|txn| filters.transaction_type.matches(txn.kind))
        .filter(|txn| period.map_or(true, |period| period.contains(txn.date)))
        .filter(|txn| needle.is_empty() || matches_search(txn, &needle))
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

fn matches_search(txn: &Transaction, needle: &str) -> bool {
    txn.description.to_lowercase().contains(needle) || txn.category.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateRange, TransactionKind, TypeFilter};
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn record(txn: Transaction) -> Record<Transaction> {
        Record::new(Uuid::new_v4(), txn, Utc::now())
    }

    fn sample(member: Uuid) -> Vec<Record<Transaction>> {
        let account = Uuid::new_v4();
        vec![
            record(
                Transaction::expense(dec!(150), "Supermercado", "Alimentação", date(15), account)
                    .with_member(member),
            ),
            record(
                Transaction::income(dec!(5000), "Salário", "Salário", date(1), account)
                    .with_member(member),
            ),
            record(Transaction::expense(dec!(60), "Uber", "Transporte", date(20), account)),
            record(Transaction::expense(dec!(80), "Farmácia", "Saúde", date(15), account)),
        ]
    }

    #[test]
    fn defaults_return_everything_newest_first() {
        let txns = sample(Uuid::new_v4());
        let result = filter_transactions(&txns, &GlobalFilters::default());
        let descriptions: Vec<_> = result.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["Uber", "Supermercado", "Farmácia", "Salário"]
        );
    }

    #[test]
    fn member_filter_is_exact() {
        let member = Uuid::new_v4();
        let txns = sample(member);
        let filters = GlobalFilters {
            selected_member: Some(member),
            ..GlobalFilters::default()
        };
        let result = filter_transactions(&txns, &filters);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| t.member_id == Some(member)));
    }

    #[test]
    fn type_filter_keeps_matching_kind() {
        let txns = sample(Uuid::new_v4());
        let filters = GlobalFilters {
            transaction_type: TypeFilter::Income,
            ..GlobalFilters::default()
        };
        let result = filter_transactions(&txns, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, TransactionKind::Income);
    }

    #[test]
    fn date_filter_needs_both_bounds() {
        let txns = sample(Uuid::new_v4());
        let half_open = GlobalFilters {
            date_range: DateRange::new(Some(date(10)), None),
            ..GlobalFilters::default()
        };
        assert_eq!(filter_transactions(&txns, &half_open).len(), 4);

        let closed = GlobalFilters {
            date_range: DateRange::new(Some(date(15)), Some(date(15))),
            ..GlobalFilters::default()
        };
        assert_eq!(filter_transactions(&txns, &closed).len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_over_description_and_category() {
        let txns = sample(Uuid::new_v4());
        let by_description = GlobalFilters {
            search_text: "SUPER".into(),
            ..GlobalFilters::default()
        };
        assert_eq!(filter_transactions(&txns, &by_description).len(), 1);

        let by_category = GlobalFilters {
            search_text: "transp".into(),
            ..GlobalFilters::default()
        };
        let result = filter_transactions(&txns, &by_category);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Uber");
    }
}
