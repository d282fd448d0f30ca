//! Clearing the warning registry.
//!
//! Kept in its own test binary so clearing cannot race the other warning
//! tests.

use boxkit_common::warning::{clear_warnings, warn_once, warned};

#[test]
fn test_clear_warnings() {
    warn_once("Clear", "transient message");
    assert!(warned("Clear", "transient message"));
    clear_warnings();
    assert!(!warned("Clear", "transient message"));

    warn_once("Clear", "transient message");
    assert!(warned("Clear", "transient message"));
}
