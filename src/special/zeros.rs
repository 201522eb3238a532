//! special::zeros — ordinates of the nontrivial zeros of ζ.
//!
//! Purpose
//! -------
//! Supply `γ_1 < γ_2 < …`, the imaginary parts of the zeros `1/2 + iγ_k`
//! on the critical line, to the explicit-formula tables.
//!
//! Key behaviors
//! -------------
//! - [`ZetaZeroOracle`] is the seam: anything that can hand back the first
//!   `count` ordinates in ascending order.
//! - [`TabulatedZeros`] reads a plain-text table. The built-in table holds
//!   the first 1000 ordinates to 12 decimals and is embedded at compile
//!   time.
//! - [`ComputedZeros`] scans Hardy's `Z(t)` for sign changes starting at
//!   `t = 10` and refines each bracket with argmin's `BrentRoot`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tables are finite, strictly positive and strictly ascending; parsing
//!   rejects anything else with the offending line number.
//! - The scan assumes consecutive zeros are further apart than `step`.
//!   With the default step of 0.05 that holds well past t = 10 000.
//!
//! Conventions
//! -----------
//! - Table format: one ordinate per line; blank lines and lines starting
//!   with `#` are ignored.
//! - Line numbers in errors are 1-based.
//!
//! Testing notes
//! -------------
//! - Unit tests cover parsing and validation of tables, exhaustion errors,
//!   and agreement of the computed oracle with the built-in table.
use argmin::{
    core::{CostFunction, Error, Executor, State},
    solver::brent::BrentRoot,
};

use crate::special::{
    errors::{OracleError, OracleResult},
    zeta::hardy_z,
};

/// Plain-text table of the first 1000 zeta-zero ordinates.
const BUILTIN_TABLE: &str = include_str!("../../data/zeta_zeros.txt");

/// Height at which [`ComputedZeros`] starts scanning. γ₁ ≈ 14.13.
pub const SCAN_START: f64 = 10.0;

/// Source of zeta-zero ordinates.
pub trait ZetaZeroOracle {
    /// Return the first `count` ordinates `γ_1..γ_count`, ascending.
    fn ordinates(&self, count: usize) -> OracleResult<Vec<f64>>;
}

// ---- Tabulated ----

/// Zeta-zero ordinates read from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedZeros {
    ordinates: Vec<f64>,
}

impl TabulatedZeros {
    /// The embedded table of the first 1000 zeros.
    pub fn builtin() -> OracleResult<Self> {
        Self::parse(BUILTIN_TABLE)
    }

    /// Parse a table: one ordinate per line, `#` comments and blank lines
    /// skipped.
    ///
    /// # Errors
    /// - [`OracleError::MalformedZeroTable`] for unparsable, non-finite,
    ///   non-positive or out-of-order entries, or an empty table.
    pub fn parse(text: &str) -> OracleResult<Self> {
        let mut ordinates = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let value: f64 = line.parse().map_err(|_| OracleError::MalformedZeroTable {
                line: idx + 1,
                reason: "Entry is not a floating-point number.",
            })?;
            push_checked(&mut ordinates, value, idx + 1)?;
        }
        if ordinates.is_empty() {
            return Err(OracleError::MalformedZeroTable {
                line: 0,
                reason: "Table contains no ordinates.",
            });
        }
        Ok(TabulatedZeros { ordinates })
    }

    /// Build a table from ordinates already in memory.
    ///
    /// # Errors
    /// - [`OracleError::MalformedZeroTable`] with the 1-based position of
    ///   the first invalid entry.
    pub fn from_ordinates(values: Vec<f64>) -> OracleResult<Self> {
        let mut ordinates = Vec::with_capacity(values.len());
        for (idx, value) in values.into_iter().enumerate() {
            push_checked(&mut ordinates, value, idx + 1)?;
        }
        if ordinates.is_empty() {
            return Err(OracleError::MalformedZeroTable {
                line: 0,
                reason: "Table contains no ordinates.",
            });
        }
        Ok(TabulatedZeros { ordinates })
    }

    /// Number of ordinates held.
    pub fn len(&self) -> usize {
        self.ordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }
}

impl ZetaZeroOracle for TabulatedZeros {
    fn ordinates(&self, count: usize) -> OracleResult<Vec<f64>> {
        if count > self.ordinates.len() {
            return Err(OracleError::ZeroTableExhausted {
                requested: count,
                available: self.ordinates.len(),
            });
        }
        Ok(self.ordinates[..count].to_vec())
    }
}

fn push_checked(ordinates: &mut Vec<f64>, value: f64, line: usize) -> OracleResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(OracleError::MalformedZeroTable {
            line,
            reason: "Ordinates must be finite and strictly positive.",
        });
    }
    if let Some(&last) = ordinates.last() {
        if value <= last {
            return Err(OracleError::MalformedZeroTable {
                line,
                reason: "Ordinates must be strictly ascending.",
            });
        }
    }
    ordinates.push(value);
    Ok(())
}

// ---- Computed ----

/// Options for the Hardy-Z zero search.
///
/// - `step`: grid spacing of the sign-change scan.
/// - `tol`: Brent tolerance on each ordinate.
/// - `max_iter`: iteration cap per Brent refinement.
/// - `t_max`: height at which the scan gives up.
/// - `verbose`: attach a terminal observer to each refinement (only with
///   the `obs_slog` feature).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroSearchOptions {
    pub step: f64,
    pub tol: f64,
    pub max_iter: u64,
    pub t_max: f64,
    pub verbose: bool,
}

impl ZeroSearchOptions {
    pub const DEFAULT_STEP: f64 = 0.05;
    pub const DEFAULT_TOL: f64 = 1e-12;
    pub const DEFAULT_MAX_ITER: u64 = 100;
    pub const DEFAULT_T_MAX: f64 = 10_000.0;

    /// Validate and build search options; `None` picks the default.
    ///
    /// # Errors
    /// - [`OracleError::InvalidSearchOption`] if `step` or `tol` is not
    ///   finite and positive, `max_iter` is zero, or `t_max` does not lie
    ///   above the scan start.
    pub fn new(
        step: Option<f64>, tol: Option<f64>, max_iter: Option<u64>, t_max: Option<f64>,
        verbose: bool,
    ) -> OracleResult<Self> {
        let step = step.unwrap_or(Self::DEFAULT_STEP);
        let tol = tol.unwrap_or(Self::DEFAULT_TOL);
        let max_iter = max_iter.unwrap_or(Self::DEFAULT_MAX_ITER);
        let t_max = t_max.unwrap_or(Self::DEFAULT_T_MAX);

        if !step.is_finite() || step <= 0.0 {
            return Err(OracleError::InvalidSearchOption {
                name: "step",
                value: step,
                reason: "Must be finite and positive.",
            });
        }
        if !tol.is_finite() || tol <= 0.0 {
            return Err(OracleError::InvalidSearchOption {
                name: "tol",
                value: tol,
                reason: "Must be finite and positive.",
            });
        }
        if max_iter == 0 {
            return Err(OracleError::InvalidSearchOption {
                name: "max_iter",
                value: 0.0,
                reason: "Must be at least 1.",
            });
        }
        if !t_max.is_finite() || t_max <= SCAN_START + step {
            return Err(OracleError::InvalidSearchOption {
                name: "t_max",
                value: t_max,
                reason: "Must be finite and above the scan start plus one step.",
            });
        }
        Ok(ZeroSearchOptions { step, tol, max_iter, t_max, verbose })
    }
}

impl Default for ZeroSearchOptions {
    fn default() -> Self {
        ZeroSearchOptions {
            step: Self::DEFAULT_STEP,
            tol: Self::DEFAULT_TOL,
            max_iter: Self::DEFAULT_MAX_ITER,
            t_max: Self::DEFAULT_T_MAX,
            verbose: false,
        }
    }
}

/// Zeta-zero ordinates located numerically from sign changes of `Z(t)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComputedZeros {
    pub options: ZeroSearchOptions,
}

impl ComputedZeros {
    pub fn new(options: ZeroSearchOptions) -> Self {
        ComputedZeros { options }
    }
}

impl ZetaZeroOracle for ComputedZeros {
    /// # Errors
    /// - [`OracleError::ZeroSearchExhausted`] if the scan passes `t_max`
    ///   first.
    /// - Any argmin failure of a refinement, mapped through
    ///   `From<argmin::core::Error>`.
    fn ordinates(&self, count: usize) -> OracleResult<Vec<f64>> {
        let opts = &self.options;
        let mut found = Vec::with_capacity(count);
        let mut lo = SCAN_START;
        let mut z_lo = hardy_z(lo)?;

        while found.len() < count {
            let hi = lo + opts.step;
            if hi > opts.t_max {
                return Err(OracleError::ZeroSearchExhausted {
                    found: found.len(),
                    requested: count,
                    t_max: opts.t_max,
                });
            }
            let z_hi = hardy_z(hi)?;
            if z_hi == 0.0 {
                found.push(hi);
            } else if z_lo != 0.0 && z_lo.signum() != z_hi.signum() {
                found.push(refine_bracket(lo, hi, opts)?);
            }
            lo = hi;
            z_lo = z_hi;
        }
        Ok(found)
    }
}

/// `Z(t)` as a one-dimensional argmin problem.
struct HardyZProblem;

impl CostFunction for HardyZProblem {
    type Param = f64;
    type Output = f64;

    fn cost(&self, t: &Self::Param) -> Result<Self::Output, Error> {
        Ok(hardy_z(*t)?)
    }
}

/// Brent root of `Z` inside `[lo, hi]`.
fn refine_bracket(lo: f64, hi: f64, opts: &ZeroSearchOptions) -> OracleResult<f64> {
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        eprintln!("zero search: refining bracket [{lo:.6}, {hi:.6}]");
    }
    let solver = BrentRoot::new(lo, hi, opts.tol);
    let mut executor = Executor::new(HardyZProblem, solver);
    executor = executor.configure(|state| state.max_iters(opts.max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        executor = executor.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let result = executor.run()?;
    // Cost is signed here, so take the last iterate rather than the best one.
    match result.state().get_param() {
        Some(&root) => Ok(root),
        None => Err(OracleError::NotInitialized {
            text: "BrentRoot finished without a parameter".to_string(),
        }),
    }
}
