//! special::errors — failures reported by the numerical oracles.
//!
//! Purpose
//! -------
//! Give the special-function and zero-finding layer one error type,
//! [`OracleError`], and a result alias, [`OracleResult`], so that ζ, Ei,
//! the zeta-zero oracles and the arithmetic helpers can propagate failures
//! with `?` instead of returning NaNs.
//!
//! Key behaviors
//! -------------
//! - Describe invalid arguments (poles, non-finite inputs), series that did
//!   not converge, and zero tables or zero searches that cannot deliver the
//!   requested number of ordinates.
//! - Normalize `argmin` runtime errors raised by the Brent refinement into
//!   crate variants via `From<argmin::core::Error>`. An `OracleError` raised
//!   inside a cost function travels through argmin as an `anyhow` payload and
//!   is recovered unchanged.
//!
//! Conventions
//! -----------
//! - Variants carry the offending value and a short static reason so the
//!   `Display` text is self-contained.
//! - The explicit-formula layer folds every `OracleError` into its
//!   configuration error kind; callers rarely match on these variants.
use argmin::core::{ArgminError, Error};

/// Result alias for oracle evaluations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors raised by the special-function and zeta-zero oracles.
#[derive(Debug, Clone, PartialEq)]
pub enum OracleError {
    // ---- Arguments ----
    /// Argument outside the domain of the function (pole, zero, non-finite).
    InvalidArgument { function: &'static str, value: f64, reason: &'static str },

    /// Iterative evaluation hit its iteration cap.
    SeriesNotConverged { function: &'static str, iterations: usize },

    // ---- Zeta-zero tables ----
    /// More zeros requested than the table holds.
    ZeroTableExhausted { requested: usize, available: usize },

    /// A line of a zero table could not be used.
    MalformedZeroTable { line: usize, reason: &'static str },

    // ---- Zero search ----
    /// The scan reached `t_max` before finding enough sign changes.
    ZeroSearchExhausted { found: usize, requested: usize, t_max: f64 },

    /// Zero-search options out of range.
    InvalidSearchOption { name: &'static str, value: f64, reason: &'static str },

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter { text: String },
    /// Wrapper for argmin::NotImplemented
    NotImplemented { text: String },
    /// Wrapper for argmin::NotInitialized
    NotInitialized { text: String },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated { text: String },
    /// Wrapper for argmin::PotentialBug
    PotentialBug { text: String },
    /// Wrapper for other argmin::Error types
    BackendError { text: String },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OracleError {}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Arguments ----
            OracleError::InvalidArgument { function, value, reason } => {
                write!(f, "Invalid argument to {function}: {value}. {reason}")
            }
            OracleError::SeriesNotConverged { function, iterations } => {
                write!(f, "{function} did not converge within {iterations} iterations")
            }

            // ---- Zeta-zero tables ----
            OracleError::ZeroTableExhausted { requested, available } => {
                write!(
                    f,
                    "Requested {requested} zeta zeros but the table only holds {available}"
                )
            }
            OracleError::MalformedZeroTable { line, reason } => {
                write!(f, "Malformed zeta-zero table at line {line}: {reason}")
            }

            // ---- Zero search ----
            OracleError::ZeroSearchExhausted { found, requested, t_max } => {
                write!(
                    f,
                    "Zero search reached t = {t_max} after {found} of {requested} zeros"
                )
            }
            OracleError::InvalidSearchOption { name, value, reason } => {
                write!(f, "Invalid zero-search option {name} = {value}: {reason}")
            }

            // ---- Argmin ----
            OracleError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OracleError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OracleError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OracleError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OracleError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OracleError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OracleError::UnknownError => {
                write!(f, "Unknown oracle error")
            }
        }
    }
}

impl From<Error> for OracleError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OracleError>() {
            Ok(oracle_err) => return oracle_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OracleError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OracleError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OracleError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => {
                    OracleError::ConditionViolated { text }
                }
                ArgminError::PotentialBug { text } => OracleError::PotentialBug { text },
                _ => OracleError::UnknownError,
            },
            Err(err) => OracleError::BackendError { text: err.to_string() },
        }
    }
}
