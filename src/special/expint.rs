//! Exponential integral Ei(z) for complex arguments, and li(x).
//!
//! Definition and branch
//! ---------------------
//! `Ei(z) = γ + Log z + Σ_{k≥1} z^k / (k·k!)` with the principal logarithm,
//! which for `Im z ≠ 0` equals `−E1(−z) + iπ·sgn(Im z)`. On the real axis
//! the real-valued branch is returned (`Ei(x) ∈ ℝ` for `x < 0` as well).
//! Real parts agree across all common branch conventions, which is all the
//! explicit formula consumes.
//!
//! Evaluation strategy
//! -------------------
//! - `|z| ≤ SERIES_RADIUS`, or `z` inside the wedge `|z| − Re z ≤
//!   SERIES_WEDGE_SLACK` around the positive real axis: the power series.
//!   The largest term is about `e^{|z|}` against a sum of about `e^{Re z}`,
//!   so at most `e^{SERIES_WEDGE_SLACK}` of relative precision is lost.
//! - Otherwise: `E1(−z)` from its continued fraction, evaluated with the
//!   modified Lentz algorithm. It converges slowly near the negative real
//!   axis of `−z`, which is exactly the wedge the series covers. The
//!   arguments produced by the explicit formula lie close to the
//!   imaginary axis.
use num_complex::Complex64;
use statrs::consts::EULER_MASCHERONI;

use crate::special::errors::{OracleError, OracleResult};

/// Largest |z| evaluated with the power series in every direction.
pub const SERIES_RADIUS: f64 = 4.0;
/// Width of the series wedge around the positive real axis, as `|z| − Re z`.
pub const SERIES_WEDGE_SLACK: f64 = 2.0;

const MAX_SERIES_TERMS: usize = 2_000;
const MAX_FRACTION_TERMS: usize = 10_000;
const TINY: f64 = 1e-300;

/// Evaluate `Ei(z)`.
///
/// # Errors
/// - [`OracleError::InvalidArgument`] if `z` is zero (logarithmic pole) or
///   has a non-finite component.
/// - [`OracleError::SeriesNotConverged`] if neither expansion converged.
pub fn ei(z: Complex64) -> OracleResult<Complex64> {
    if !z.re.is_finite() || !z.im.is_finite() {
        return Err(OracleError::InvalidArgument {
            function: "ei",
            value: if z.re.is_finite() { z.im } else { z.re },
            reason: "Argument must be finite.",
        });
    }
    if z.re == 0.0 && z.im == 0.0 {
        return Err(OracleError::InvalidArgument {
            function: "ei",
            value: 0.0,
            reason: "Ei has a logarithmic singularity at 0.",
        });
    }

    let modulus = z.norm();
    let near_positive_axis = z.re > 0.0 && modulus - z.re <= SERIES_WEDGE_SLACK;
    if near_positive_axis || modulus <= SERIES_RADIUS {
        ei_series(z)
    } else {
        let e1 = e1_continued_fraction(-z)?;
        let branch = if z.im > 0.0 {
            std::f64::consts::PI
        } else if z.im < 0.0 {
            -std::f64::consts::PI
        } else {
            0.0
        };
        Ok(-e1 + Complex64::new(0.0, branch))
    }
}

/// Logarithmic integral `li(x) = Ei(ln x)` for real `x > 0`, `x ≠ 1`.
///
/// # Errors
/// - [`OracleError::InvalidArgument`] for `x ≤ 0`, `x = 1` or non-finite `x`.
pub fn li(x: f64) -> OracleResult<f64> {
    if !x.is_finite() || x <= 0.0 {
        return Err(OracleError::InvalidArgument {
            function: "li",
            value: x,
            reason: "li is defined for finite x > 0.",
        });
    }
    if x == 1.0 {
        return Err(OracleError::InvalidArgument {
            function: "li",
            value: x,
            reason: "li has a logarithmic singularity at 1.",
        });
    }
    Ok(ei(Complex64::new(x.ln(), 0.0))?.re)
}

fn ei_series(z: Complex64) -> OracleResult<Complex64> {
    let mut power = Complex64::new(1.0, 0.0);
    let mut sum = Complex64::new(0.0, 0.0);
    let mut converged = false;
    for k in 1..=MAX_SERIES_TERMS {
        let kf = k as f64;
        power *= z / kf;
        let term = power / kf;
        sum += term;
        if term.norm() <= f64::EPSILON * 0.1 * sum.norm() {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(OracleError::SeriesNotConverged {
            function: "ei (power series)",
            iterations: MAX_SERIES_TERMS,
        });
    }

    // Real arguments stay on the real-valued branch.
    let log_z = if z.im == 0.0 { Complex64::new(z.re.abs().ln(), 0.0) } else { z.ln() };
    Ok(Complex64::new(EULER_MASCHERONI, 0.0) + log_z + sum)
}

/// `E1(w)` via `e^{-w} / (w + 1 − 1²/(w + 3 − 2²/(w + 5 − …)))`.
fn e1_continued_fraction(w: Complex64) -> OracleResult<Complex64> {
    let mut b = w + 1.0;
    let mut c = Complex64::new(1.0 / TINY, 0.0);
    let mut d = b.inv();
    let mut h = d;
    for i in 1..=MAX_FRACTION_TERMS {
        let an = -((i * i) as f64);
        b += 2.0;
        let mut denom = d * an + b;
        if denom.norm() < TINY {
            denom = Complex64::new(TINY, 0.0);
        }
        d = denom.inv();
        c = b + c.inv() * an;
        if c.norm() < TINY {
            c = Complex64::new(TINY, 0.0);
        }
        let delta = c * d;
        h *= delta;
        if (delta - 1.0).norm() <= f64::EPSILON {
            return Ok(h * (-w).exp());
        }
    }
    Err(OracleError::SeriesNotConverged {
        function: "ei (continued fraction)",
        iterations: MAX_FRACTION_TERMS,
    })
}
