//! explicit_formula::errors — error types for the explicit-formula approximator.
//!
//! Purpose
//! -------
//! Provide one error enum, [`ExplicitError`], and a result alias,
//! [`ExplicitResult`], for configuration, evaluation and curve sampling,
//! plus the bridge into Python exceptions.
//!
//! Key behaviors
//! -------------
//! - Classify every failure into one of two kinds through
//!   [`ExplicitError::kind`]:
//!   - [`ErrorKind::Config`]: the approximator cannot be built (bad `kmax`,
//!     `xmax` or precision, or a zeta-zero oracle that cannot supply `kmax`
//!     zeros).
//!   - [`ErrorKind::Range`]: a query lies outside the configured domain
//!     (`x`, `k` or a plotting range).
//! - Fold oracle failures ([`OracleError`]) into the configuration kind via
//!   `From<OracleError>`.
//! - Implement `From<ExplicitError> for PyErr`, mapping both kinds to
//!   `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Range errors name the violated bound and carry the permitted range, so
//!   the message alone tells the caller what to change.
//! - Nothing is cached when an error is returned.
//!
//! Testing notes
//! -------------
//! - Unit tests check kind classification, payload embedding in messages and
//!   the oracle conversion. The PyO3 conversion is left to Python-level
//!   tests.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::special::errors::OracleError;

pub type ExplicitResult<T> = Result<T, ExplicitError>;

/// Coarse classification of [`ExplicitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Construction-time failure.
    Config,
    /// Query outside the configured domain.
    Range,
}

/// ExplicitError — failures of the explicit-formula approximator.
///
/// Variants
/// --------
/// - `InvalidKMax`, `InvalidXMax`, `InvalidPrecision`
///   Rejected configuration values.
/// - `ZeroTableExhausted`
///   The zeta-zero oracle holds fewer than `kmax` zeros.
/// - `OracleFailure`
///   Any other oracle failure during table construction.
/// - `XOutOfRange`, `XAtSingularity`, `KOutOfRange`
///   Rejected query arguments.
/// - `InvalidPlotRange`, `InvalidPlotPoints`
///   Rejected curve-sampling options.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplicitError {
    // ---- Configuration ----
    InvalidKMax { kmax: usize, reason: &'static str },
    InvalidXMax { xmax: f64, reason: &'static str },
    InvalidPrecision { precision: usize, reason: &'static str },
    ZeroTableExhausted { requested: usize, available: usize },
    OracleFailure { source: OracleError },

    // ---- Query range ----
    XOutOfRange { x: f64, xmax: f64 },
    XAtSingularity { x: f64 },
    KOutOfRange { k: usize, kmax: usize },

    // ---- Curve sampling ----
    InvalidPlotRange { xmin: f64, xmax: f64, reason: String },
    InvalidPlotPoints { points: usize },
}

impl ExplicitError {
    /// Which of the two error kinds this failure belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExplicitError::InvalidKMax { .. }
            | ExplicitError::InvalidXMax { .. }
            | ExplicitError::InvalidPrecision { .. }
            | ExplicitError::ZeroTableExhausted { .. }
            | ExplicitError::OracleFailure { .. } => ErrorKind::Config,
            ExplicitError::XOutOfRange { .. }
            | ExplicitError::XAtSingularity { .. }
            | ExplicitError::KOutOfRange { .. }
            | ExplicitError::InvalidPlotRange { .. }
            | ExplicitError::InvalidPlotPoints { .. } => ErrorKind::Range,
        }
    }

    pub fn is_config(&self) -> bool {
        self.kind() == ErrorKind::Config
    }

    pub fn is_range(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}

impl std::error::Error for ExplicitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExplicitError::OracleFailure { source } => Some(source),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExplicitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Configuration ----
            ExplicitError::InvalidKMax { kmax, reason } => {
                write!(f, "Invalid kmax: {kmax}. {reason}")
            }
            ExplicitError::InvalidXMax { xmax, reason } => {
                write!(f, "Invalid xmax: {xmax}. {reason}")
            }
            ExplicitError::InvalidPrecision { precision, reason } => {
                write!(f, "Invalid precision: {precision}. {reason}")
            }
            ExplicitError::ZeroTableExhausted { requested, available } => {
                write!(
                    f,
                    "kmax = {requested} exceeds the {available} zeta zeros available from the oracle"
                )
            }
            ExplicitError::OracleFailure { source } => {
                write!(f, "Failed to build explicit-formula tables: {source}")
            }

            // ---- Query range ----
            ExplicitError::XOutOfRange { x, xmax } => {
                write!(f, "x = {x} is out of range: must satisfy 0 < x <= {xmax}")
            }
            ExplicitError::XAtSingularity { x } => {
                write!(f, "x = {x} is singular for the zero corrections: x must differ from 1")
            }
            ExplicitError::KOutOfRange { k, kmax } => {
                write!(f, "k = {k} is out of range: must satisfy 1 <= k <= {kmax}")
            }

            // ---- Curve sampling ----
            ExplicitError::InvalidPlotRange { xmin, xmax, reason } => {
                write!(f, "Invalid plot range [{xmin}, {xmax}]: {reason}")
            }
            ExplicitError::InvalidPlotPoints { points } => {
                write!(f, "Invalid plot_points: {points}. Must be at least 1.")
            }
        }
    }
}

impl From<OracleError> for ExplicitError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::ZeroTableExhausted { requested, available } => {
                ExplicitError::ZeroTableExhausted { requested, available }
            }
            other => ExplicitError::OracleFailure { source: other },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ExplicitError> for PyErr {
    fn from(err: ExplicitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
