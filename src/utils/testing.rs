// Tue Jan 13 2026 - Alex

use crate::layout::AccessPattern;

/// Routes `log` output through the test harness; safe to call repeatedly.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn pat(base: u64, strides: &[u64], access_size: u64) -> AccessPattern {
    AccessPattern::new(base, access_size).with_strides(strides.iter().copied())
}
