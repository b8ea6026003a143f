//! Common utilities for integration tests

#![allow(dead_code)]

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_curves_close,
    assert_monotonic_toward_ambient,
    concrete_parameters,
    relative_error,
};
