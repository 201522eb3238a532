//! ApproxConfig — validated configuration of the explicit-formula approximator.
//!
//! Purpose
//! -------
//! Hold the three knobs that fix an approximator: the largest correction
//! index `kmax`, the largest admissible query `xmax`, and the number of
//! terms of the Gram series for `R(x)`.
//!
//! Key behaviors
//! -------------
//! - [`ApproxConfig::new`] validates all three and fills in the default
//!   precision.
//! - [`ApproxConfig::n_terms`] derives `N = ⌊ln xmax / ln 2⌋`, the number of
//!   Möbius terms each zero correction sums over.
//!
//! Invariants & assumptions
//! ------------------------
//! - `kmax >= 1`, `xmax > 2` and finite, `precision >= 1`.
//! - The value is immutable once built; changing any knob means building a
//!   new approximator.
//!
//! Conventions
//! -----------
//! - The default precision of 50 keeps the truncation error of `R(x)` below
//!   1e-9 up to `x = 1e6`. For larger `xmax` a precision of roughly
//!   `e·ln(xmax) + 10` is needed.
use crate::explicit_formula::errors::{ExplicitError, ExplicitResult};

/// Default number of Gram-series terms for `R(x)`.
pub const DEFAULT_PRECISION: usize = 50;

/// Validated `(kmax, xmax, precision)` triple.
///
/// Fields are private so that [`ApproxConfig::new`] is the only way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxConfig {
    kmax: usize,
    xmax: f64,
    precision: usize,
}

impl ApproxConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    /// - `ExplicitError::InvalidKMax` if `kmax < 1`.
    /// - `ExplicitError::InvalidXMax` if `xmax <= 2` or not finite.
    /// - `ExplicitError::InvalidPrecision` if `precision == Some(0)`.
    pub fn new(kmax: usize, xmax: f64, precision: Option<usize>) -> ExplicitResult<Self> {
        if kmax < 1 {
            return Err(ExplicitError::InvalidKMax { kmax, reason: "kmax must be at least 1." });
        }
        if !xmax.is_finite() {
            return Err(ExplicitError::InvalidXMax { xmax, reason: "xmax must be finite." });
        }
        if xmax <= 2.0 {
            return Err(ExplicitError::InvalidXMax {
                xmax,
                reason: "xmax must be greater than 2.",
            });
        }
        let precision = precision.unwrap_or(DEFAULT_PRECISION);
        if precision < 1 {
            return Err(ExplicitError::InvalidPrecision {
                precision,
                reason: "precision must be at least 1.",
            });
        }
        Ok(ApproxConfig { kmax, xmax, precision })
    }

    /// Largest number of zero-pair corrections.
    pub fn kmax(&self) -> usize {
        self.kmax
    }

    /// Largest admissible query x.
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Number of terms in the series for `R(x)`.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// `N = ⌊ln xmax / ln 2⌋`, at least 1 since `xmax > 2`.
    pub fn n_terms(&self) -> usize {
        (self.xmax.ln() / std::f64::consts::LN_2).floor() as usize
    }
}
