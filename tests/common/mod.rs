// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for integration tests.

use tracing_subscriber::filter::LevelFilter;

/// Installs a tracing subscriber writing to the test capture buffer.
///
/// Safe to call from every test; only the first call in a test binary
/// installs, later calls are no-ops.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}
