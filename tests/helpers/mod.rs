//! Test helpers module
//!
//! Shared fixtures for the MarketLocale integration tests: sample translation
//! trees, translation directories on disk and preference stores that fail on
//! demand.

#![allow(dead_code)]

pub mod fixtures;
pub mod stores;

pub use fixtures::*;
pub use stores::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}
