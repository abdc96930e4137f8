use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mycash_core::domain::{BankAccount, CreditCard, FamilyMember, Period, Transaction, TypeFilter};
use mycash_core::storage::json_backend::{load_snapshot_from_path, save_snapshot_to_path};
use mycash_core::FinanceStore;
use rust_decimal::Decimal;
use tempfile::tempdir;

const CATEGORIES: [&str; 6] = [
    "Alimentação",
    "Transporte",
    "Moradia",
    "Saúde",
    "Educação",
    "Lazer",
];

fn build_sample_store(txn_count: usize) -> FinanceStore {
    let mut store = FinanceStore::new();
    let owner = store.add_family_member(FamilyMember::new("Bench", "owner"));
    let account = store.add_bank_account(BankAccount::new(
        "Checking",
        owner,
        Decimal::new(1_000_000, 2),
    ));
    store.add_credit_card(
        CreditCard::new("Card", owner, Decimal::from(5000)).with_bill(Decimal::from(800)),
    );

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for idx in 0..txn_count {
        let date = start + Duration::days((idx % 365) as i64);
        let amount = Decimal::new(5_000 + (idx % 100) as i64 * 37, 2);
        let txn = if idx % 10 == 0 {
            Transaction::income(amount * Decimal::from(20), "Salário", "Salário", date, account)
        } else {
            let category = CATEGORIES[idx % CATEGORIES.len()];
            Transaction::expense(amount, format!("Compra {idx}"), category, date, account)
        };
        let txn = if idx % 2 == 0 { txn.with_member(owner) } else { txn };
        store.add_transaction(if idx % 3 == 0 { txn.settled() } else { txn });
    }
    store
}

fn bench_derivations(c: &mut Criterion) {
    let mut store = build_sample_store(black_box(10_000));
    let year = Period::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    );

    c.bench_function("period_summary_10k", |b| {
        b.iter(|| black_box(store.period_summary(year)))
    });

    c.bench_function("category_spending_10k", |b| {
        b.iter(|| black_box(store.category_spending(year)))
    });

    c.bench_function("upcoming_expenses_10k", |b| {
        b.iter(|| black_box(store.upcoming_expenses(5)))
    });

    store.update_filters(|filters| {
        filters.transaction_type = TypeFilter::Expense;
        filters.search_text = "compra 9".into();
    });
    c.bench_function("filtered_transactions_10k", |b| {
        b.iter(|| black_box(store.filtered_transactions().len()))
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let store = build_sample_store(black_box(10_000));
    let snapshot = store.snapshot();
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("finance.json");

    c.bench_function("snapshot_save_10k", |b| {
        b.iter(|| save_snapshot_to_path(&snapshot, &file_path).expect("save snapshot"))
    });

    save_snapshot_to_path(&snapshot, &file_path).expect("seed");

    c.bench_function("snapshot_load_10k", |b| {
        b.iter(|| black_box(load_snapshot_from_path(&file_path).expect("load snapshot")))
    });
}

criterion_group!(benches, bench_derivations, bench_snapshot_io);
criterion_main!(benches);
