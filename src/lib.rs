//! riemann_pi — Riemann's explicit formula for π(x), with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the explicit-formula approximator to Python via the `_riemann_pi`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing classes and the
//! `riemann_pi.explicit_formula` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: [`explicit_formula`] (the approximator
//!   and curve sampling) and [`special`] (ζ, Ei, zeta zeros, Möbius, π).
//! - Define `#[pyclass]` wrappers for the approximator and for sampled
//!   curves, and the `#[pymodule]` initializer.
//! - Register the `explicit_formula` submodule in `sys.modules` so that
//!   dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, argument conversion and error mapping.
//! - Python-visible methods keep the short names of the formula:
//!   `R`, `Sk`, `Tk`, `Rk`.
//!
//! Conventions
//! -----------
//! - Errors from the core are converted to `ValueError` at the boundary;
//!   malformed argument types raise `TypeError`.
//! - Arrays cross the boundary as NumPy arrays (`rk` as a 2-D array with
//!   one row per k).
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_explicit_formula.rs`. The PyO3 layer is
//!   exercised from Python.

pub mod explicit_formula;
pub mod special;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    explicit_formula::{CurveOptions, RiemannPiApproximation, RkCurve},
    utils::{extract_k_list, extract_x_values},
};

/// RiemannPi — Python-facing wrapper for [`RiemannPiApproximation`].
///
/// Purpose
/// -------
/// Let Python callers evaluate `R(x)`, `S_k(x)`, `T_k(x)` and `R_k(x)` and
/// sample `R_k` curves, sharing one cache across calls.
///
/// Parameters
/// ----------
/// Constructed from Python via `RiemannPiApproximation(kmax, xmax, prec=50)`:
/// - `kmax`: `usize`, at least 1 and at most 1000.
/// - `xmax`: `f64`, finite and greater than 2.
/// - `prec`: `usize`, number of terms of the series for `R(x)`.
///
/// Notes
/// -----
/// - `unsendable`: the cache is single-threaded. `plot_Rk` still uses all
///   cores by forking private approximators over the shared tables.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "riemann_pi.explicit_formula", name = "RiemannPiApproximation", unsendable)]
pub struct RiemannPi {
    inner: RiemannPiApproximation,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl RiemannPi {
    #[new]
    #[pyo3(signature = (kmax, xmax, prec = 50), text_signature = "(kmax, xmax, /, prec=50)")]
    pub fn new(kmax: usize, xmax: f64, prec: usize) -> PyResult<Self> {
        let inner = RiemannPiApproximation::new(kmax, xmax, Some(prec))?;
        Ok(RiemannPi { inner })
    }

    /// Riemann's smooth approximation R(x).
    #[pyo3(name = "R")]
    pub fn base_term(&self, x: f64) -> PyResult<f64> {
        Ok(self.inner.base_term(x)?)
    }

    /// Correction S_k(x) from the trivial terms and the first k zero pairs.
    #[pyo3(name = "Sk")]
    pub fn correction_term(&self, x: f64, k: usize) -> PyResult<f64> {
        Ok(self.inner.correction_term(x, k)?)
    }

    /// Contribution T_k(x) of the k-th zero pair.
    #[pyo3(name = "Tk")]
    pub fn single_zero_term(&self, x: f64, k: usize) -> PyResult<f64> {
        Ok(self.inner.single_zero_term(x, k)?)
    }

    /// R_k(x) = R(x) + S_k(x).
    #[pyo3(name = "Rk")]
    pub fn approximate(&self, x: f64, k: usize) -> PyResult<f64> {
        Ok(self.inner.approximate(x, k)?)
    }

    /// R_k evaluated at every entry of `xs`.
    #[pyo3(name = "Rk_many")]
    pub fn approximate_many<'py>(
        &self, py: Python<'py>, xs: &Bound<'py, PyAny>, k: usize,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let arr = extract_x_values(py, xs)?;
        let values = arr
            .as_slice()
            .map_err(|_| PyValueError::new_err("xs must be a contiguous 1-D float64 array"))?;
        let out = values
            .iter()
            .map(|&x| self.inner.approximate(x, k))
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(out.into_pyarray(py))
    }

    /// Sample R_k for one k or a list of k on an evenly spaced grid.
    #[pyo3(
        name = "plot_Rk",
        signature = (k, xmin = 2.0, xmax = None, plot_points = 100)
    )]
    pub fn plot_rk(
        &self, k: &Bound<'_, PyAny>, xmin: f64, xmax: Option<f64>, plot_points: usize,
    ) -> PyResult<PyRkCurve> {
        let ks = extract_k_list(k)?;
        let opts = CurveOptions::new(Some(xmin), xmax, Some(plot_points))?;
        let curve = self.inner.sample_rk_par(&ks, &opts)?;
        Ok(PyRkCurve { inner: curve })
    }

    #[getter]
    pub fn kmax(&self) -> usize {
        self.inner.kmax()
    }

    #[getter]
    pub fn xmax(&self) -> f64 {
        self.inner.xmax()
    }

    #[getter]
    pub fn precision(&self) -> usize {
        self.inner.config().precision()
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

/// PyRkCurve — sampled `R_k` curves with π(x) and li(x) on the same grid.
///
/// Instances are returned by `RiemannPiApproximation.plot_Rk` and are not
/// created directly by user code.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "riemann_pi.explicit_formula", name = "RkCurve")]
pub struct PyRkCurve {
    pub inner: RkCurve,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyRkCurve {
    #[getter]
    pub fn x<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.x.clone().into_pyarray(py)
    }

    #[getter]
    pub fn ks(&self) -> Vec<usize> {
        self.inner.ks.clone()
    }

    /// Shape `(len(ks), len(x))`.
    #[getter]
    pub fn rk<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.rk.clone().into_pyarray(py)
    }

    #[getter]
    pub fn prime_pi<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        self.inner.prime_pi.clone().into_pyarray(py)
    }

    #[getter]
    pub fn li<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.li.clone().into_pyarray(py)
    }
}

/// _riemann_pi — PyO3 module initializer for the Python extension.
///
/// Creates the `explicit_formula` submodule, attaches it to `_riemann_pi`
/// and registers it in `sys.modules` as `riemann_pi.explicit_formula`.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _riemann_pi<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let explicit_formula_mod = PyModule::new(_py, "explicit_formula")?;
    explicit_formula(_py, m, &explicit_formula_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("riemann_pi.explicit_formula", explicit_formula_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn explicit_formula<'py>(
    _py: Python, riemann_pi: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<RiemannPi>()?;
    m.add_class::<PyRkCurve>()?;
    riemann_pi.add_submodule(m)?;
    Ok(())
}
