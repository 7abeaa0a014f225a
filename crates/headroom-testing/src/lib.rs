//! Testing utilities and harness for headroom

pub mod hosts;
pub mod test_rule;

pub use hosts::{ManualHost, TestClassList, TestScroller};
pub use test_rule::*;

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::{init_logging, HeadroomTestRule, ManualHost, TestClassList, TestScroller};
}
