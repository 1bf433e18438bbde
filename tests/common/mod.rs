//! Helpers shared by the integration test suites

#![allow(dead_code)]

/// Routes `log` output through the test harness; `RUST_LOG=trace` shows the
/// carry chain of every forest merge
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Orders whose bit is set in `len`, ascending
pub fn set_bits(len: usize) -> Vec<usize> {
    (0..usize::BITS as usize)
        .filter(|bit| len & (1 << bit) != 0)
        .collect()
}
