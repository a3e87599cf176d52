//! Tests for the PhaseSync tracing setup.

use std::sync::Mutex;

use phasesync_core::tracing::{init_tracing, init_tracing_with_default};

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_phasesync_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PHASESYNC_LOG", "debug");
    init_tracing();
    std::env::remove_var("PHASESYNC_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing_with_default("phasesync=trace");
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PHASESYNC_LOG", "=[not a filter");
    init_tracing_with_default("also [ not valid");
    std::env::remove_var("PHASESYNC_LOG");
}
