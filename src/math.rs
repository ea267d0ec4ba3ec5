//! Checked scalar primitives.
//!
//! Each helper takes the name of the calling formula so that a domain
//! violation is reported against the quantity being computed rather than the
//! primitive that tripped.

use crate::error::{Error, Result};

pub fn sqrt(x: f64, op: &'static str) -> Result<f64> {
    if x.is_nan() || x < 0.0 {
        return Err(Error::domain(op, format!("square root of negative value {}", x)));
    }
    Ok(x.sqrt())
}

pub fn ln(x: f64, op: &'static str) -> Result<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(Error::domain(op, format!("logarithm of non-positive value {}", x)));
    }
    Ok(x.ln())
}

pub fn div(num: f64, den: f64, op: &'static str) -> Result<f64> {
    if den == 0.0 {
        return Err(Error::domain(op, "division by zero"));
    }
    finite(num / den, op)
}

/// Reject NaN and infinities that slipped through an otherwise valid formula.
pub fn finite(x: f64, op: &'static str) -> Result<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(Error::domain(op, format!("non-finite result {}", x)))
    }
}

/// Require `x > 0`.
pub fn positive(x: f64, op: &'static str, what: &str) -> Result<f64> {
    if x > 0.0 && x.is_finite() {
        Ok(x)
    } else {
        Err(Error::domain(op, format!("{} must be positive, got {}", what, x)))
    }
}
