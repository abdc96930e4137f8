#![doc(test(attr(deny(warnings))))]

//! MyCash core: the in-memory household finance store, the views derived from
//! it, and the persistence hooks that keep it on disk.

pub mod config;
pub mod core;
pub mod derivations;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

pub use crate::core::{FinanceManager, LoadReport};
pub use errors::{FinanceError, Result};
pub use store::FinanceStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            "MyCash core tracing initialized."
        );
    });
}
