//! explicit_formula::validation — argument guards for approximator queries.
//!
//! Purpose
//! -------
//! Centralize the precondition checks shared by `base_term`,
//! `correction_term`, `single_zero_term`, `approximate` and the curve
//! sampler, so each method fails the same way on the same input.
//!
//! Invariants & assumptions
//! ------------------------
//! - Admissible x: `0 < x <= xmax` and finite.
//! - The zero corrections additionally need `x != 1`, where `ln x = 0`.
//! - Admissible k: `1 <= k <= kmax`.
//!
//! Conventions
//! -----------
//! - Checks run before any cache lookup or evaluation, so failed queries
//!   leave the memo tables untouched.
use crate::explicit_formula::errors::{ExplicitError, ExplicitResult};

/// Require `0 < x <= xmax` with `x` finite.
///
/// # Errors
/// - `ExplicitError::XOutOfRange` otherwise.
pub fn check_x(x: f64, xmax: f64) -> ExplicitResult<()> {
    if !x.is_finite() || x <= 0.0 || x > xmax {
        return Err(ExplicitError::XOutOfRange { x, xmax });
    }
    Ok(())
}

/// [`check_x`] plus `x != 1`.
///
/// # Errors
/// - `ExplicitError::XOutOfRange` or `ExplicitError::XAtSingularity`.
pub fn check_x_regular(x: f64, xmax: f64) -> ExplicitResult<()> {
    check_x(x, xmax)?;
    if x == 1.0 {
        return Err(ExplicitError::XAtSingularity { x });
    }
    Ok(())
}

/// Require `1 <= k <= kmax`.
///
/// # Errors
/// - `ExplicitError::KOutOfRange` otherwise.
pub fn check_k(k: usize, kmax: usize) -> ExplicitResult<()> {
    if k < 1 || k > kmax {
        return Err(ExplicitError::KOutOfRange { k, kmax });
    }
    Ok(())
}
