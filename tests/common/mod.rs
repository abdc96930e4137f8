#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use mycash_core::{storage::JsonRepository, FinanceManager, FinanceStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Manager backed by a JSON file in an isolated directory, already loaded.
pub fn json_manager(seed_sample_data: bool) -> (FinanceManager, PathBuf) {
    let path = temp_dir().join("finance.json");
    let mut manager = FinanceManager::new(Box::new(JsonRepository::new(&path)));
    manager
        .load(seed_sample_data)
        .expect("load json-backed manager");
    (manager, path)
}

pub fn sample_store() -> FinanceStore {
    FinanceStore::with_sample_data()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
