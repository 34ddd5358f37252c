mod timeline;

pub mod data;

use log::LevelFilter;
use std::sync::Once;

use std::str::FromStr;

use crate::prelude::{Epoch, Observer};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference query instant shared by the test suite.
pub fn t0() -> Epoch {
    Epoch::from_str("2025-03-01T18:00:00 UTC").unwrap()
}

/// Reference observation site (New Delhi).
pub fn new_delhi() -> Observer {
    Observer::new(28.6139, 77.2090, 216.0).unwrap()
}
