//! Argument extraction helpers for the PyO3 bindings.
//!
//! - [`extract_x_values`] accepts a NumPy array, a pandas Series or any
//!   sequence of floats and returns a contiguous read-only `f64` view.
//! - [`extract_k_list`] accepts either a single integer or a sequence of
//!   integers, matching the `plot_Rk(k, ...)` calling convention.
#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Contiguous `f64` view of a 1-D array-like of query points.
#[cfg(feature = "python-bindings")]
pub fn extract_x_values<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    // pandas.Series and friends
    if let Ok(obj) = raw.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let values: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err(
            "x values must be a 1-D numpy.ndarray, pandas.Series, or sequence of float",
        )
    })?;
    Ok(values.into_pyarray(py).readonly())
}

/// One `k` or a list of them.
#[cfg(feature = "python-bindings")]
pub fn extract_k_list(raw: &Bound<'_, PyAny>) -> PyResult<Vec<usize>> {
    if let Ok(k) = raw.extract::<usize>() {
        return Ok(vec![k]);
    }
    raw.extract::<Vec<usize>>().map_err(|_| {
        PyTypeError::new_err(
            "k must be a non-negative integer or a sequence of non-negative integers",
        )
    })
}
