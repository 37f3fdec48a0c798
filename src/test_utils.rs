// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 threshold comparisons.
pub const F32_EPSILON: f32 = 1e-6;
