// tests/common/mod.rs

pub use stepdag_test_utils::{builders, init_tracing};
