//! Scalar arithmetic.
//!
//! Integer operations saturate at the `i32` bounds instead of wrapping or trapping.

use crate::common::error::{BridgeError, BridgeResult};

pub fn add(a: i32, b: i32) -> i32 {
    a.saturating_add(b)
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a.saturating_mul(b)
}

/// Divide `a` by `b`. Only an exact zero divisor (either sign) is rejected.
pub fn divide(a: f64, b: f64) -> BridgeResult<f64> {
    if b == 0.0 {
        return Err(BridgeError::DivisionByZero);
    }
    Ok(a / b)
}
