//! Process-wide log backend setup

use std::env;
use std::sync::Once;

use env_logger::{Builder, DEFAULT_FILTER_ENV};
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `env_logger` backend once per process.
///
/// Defaults to `warn` globally and `info` for this crate. A set `RUST_LOG`
/// replaces both.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();
        builder.format_timestamp_millis();

        // Module defaults would outrank a blanket RUST_LOG directive such as `off`
        if env::var_os(DEFAULT_FILTER_ENV).is_some() {
            builder.parse_default_env();
        } else {
            builder
                .filter_level(LevelFilter::Warn)
                .filter_module("linprobe", LevelFilter::Info)
                .filter_module("amigosim", LevelFilter::Info);
        }

        // Another logger may already be installed, e.g. by a test harness
        let _ = builder.try_init();
    });
}
