//! explicit_formula::curve — sampling R_k(x) over a grid for plotting.
//!
//! Purpose
//! -------
//! Produce the numbers a plotting front end draws: `R_k(x)` for one or more
//! k on an evenly spaced grid, together with the exact prime count π(x) and
//! the logarithmic integral li(x) at the same points.
//!
//! Key behaviors
//! -------------
//! - [`CurveOptions`] carries the grid request with defaults
//!   `xmin = 2`, `xmax = config.xmax`, `plot_points = 100`.
//! - [`RiemannPiApproximation::sample_rk`] evaluates sequentially through
//!   the approximator's own caches.
//! - [`RiemannPiApproximation::sample_rk_par`] spreads the grid over a rayon
//!   pool. Each worker forks its own approximator over the shared tables,
//!   so results are bit-identical to the sequential path.
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 < xmin < xmax <= config.xmax` and `plot_points >= 1`.
//! - The plotted `xmax` is at most `PRIME_PI_LIMIT` (1e7), since π(x) is
//!   counted exactly at every node. Larger grids are a plot-range error.
//! - The grid has `plot_points + 1` nodes `xmin + i·(xmax − xmin)/plot_points`;
//!   the last node is pinned to `xmax` exactly.
//! - Every requested k is validated before any evaluation starts.
//!
//! Conventions
//! -----------
//! - `RkCurve::rk` is laid out `(ks.len(), grid.len())`: one row per k.
use std::sync::Arc;

use ndarray::{Array1, Array2};
use rayon::prelude::*;

use crate::{
    explicit_formula::{
        approximation::RiemannPiApproximation,
        errors::{ExplicitError, ExplicitResult},
        validation::check_k,
    },
    special::{
        arithmetic::{PRIME_PI_LIMIT, prime_pi_many},
        expint::li,
    },
};

/// Default lower end of the plotted range.
pub const DEFAULT_XMIN: f64 = 2.0;
/// Default number of grid intervals.
pub const DEFAULT_PLOT_POINTS: usize = 100;

/// Grid request for [`RiemannPiApproximation::sample_rk`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveOptions {
    pub xmin: f64,
    /// `None` means the approximator's `xmax`.
    pub xmax: Option<f64>,
    pub plot_points: usize,
}

impl CurveOptions {
    /// Validate what can be checked without an approximator.
    ///
    /// # Errors
    /// - `ExplicitError::InvalidPlotRange` unless `xmin > 1` (and
    ///   `xmin < xmax` when `xmax` is given), with finite bounds.
    /// - `ExplicitError::InvalidPlotPoints` if `plot_points == Some(0)`.
    pub fn new(
        xmin: Option<f64>, xmax: Option<f64>, plot_points: Option<usize>,
    ) -> ExplicitResult<Self> {
        let xmin = xmin.unwrap_or(DEFAULT_XMIN);
        let plot_points = plot_points.unwrap_or(DEFAULT_PLOT_POINTS);
        if plot_points < 1 {
            return Err(ExplicitError::InvalidPlotPoints { points: plot_points });
        }
        let shown_xmax = xmax.unwrap_or(f64::NAN);
        if !xmin.is_finite() || xmin <= 1.0 {
            return Err(ExplicitError::InvalidPlotRange {
                xmin,
                xmax: shown_xmax,
                reason: "xmin must be finite and greater than 1".to_string(),
            });
        }
        if let Some(hi) = xmax {
            if !hi.is_finite() || hi <= xmin {
                return Err(ExplicitError::InvalidPlotRange {
                    xmin,
                    xmax: hi,
                    reason: "xmax must be finite and greater than xmin".to_string(),
                });
            }
        }
        Ok(CurveOptions { xmin, xmax, plot_points })
    }

    /// Grid nodes for an approximator bounded by `limit`.
    ///
    /// # Errors
    /// - `ExplicitError::InvalidPlotRange` if the resolved `xmax` exceeds
    ///   `limit` or does not lie above `xmin`.
    pub fn grid(&self, limit: f64) -> ExplicitResult<Array1<f64>> {
        let xmax = self.xmax.unwrap_or(limit);
        if xmax > limit {
            return Err(ExplicitError::InvalidPlotRange {
                xmin: self.xmin,
                xmax,
                reason: format!("xmax must be at most {limit}"),
            });
        }
        if self.xmin >= xmax {
            return Err(ExplicitError::InvalidPlotRange {
                xmin: self.xmin,
                xmax,
                reason: "xmin must be less than xmax".to_string(),
            });
        }
        let eps = (xmax - self.xmin) / self.plot_points as f64;
        let mut grid =
            Array1::from_iter((0..=self.plot_points).map(|i| self.xmin + i as f64 * eps));
        grid[self.plot_points] = xmax;
        Ok(grid)
    }
}

impl Default for CurveOptions {
    fn default() -> Self {
        CurveOptions { xmin: DEFAULT_XMIN, xmax: None, plot_points: DEFAULT_PLOT_POINTS }
    }
}

/// Sampled curves: `rk[[j, i]] = R_{ks[j]}(x[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct RkCurve {
    pub x: Array1<f64>,
    pub ks: Vec<usize>,
    pub rk: Array2<f64>,
    /// π(x) at each grid node.
    pub prime_pi: Array1<u64>,
    /// li(x) at each grid node.
    pub li: Array1<f64>,
}

impl RiemannPiApproximation {
    /// Sample `R_k` for every `k` in `ks` on the grid of `opts`.
    ///
    /// # Errors
    /// - `ExplicitError::KOutOfRange` for any k outside `1..=kmax`.
    /// - Plot-range errors from [`CurveOptions::grid`], or if the grid
    ///   reaches past `PRIME_PI_LIMIT`.
    pub fn sample_rk(&self, ks: &[usize], opts: &CurveOptions) -> ExplicitResult<RkCurve> {
        let grid = self.prepare(ks, opts)?;
        let mut rk = Array2::zeros((ks.len(), grid.len()));
        for (i, &x) in grid.iter().enumerate() {
            for (j, &k) in ks.iter().enumerate() {
                rk[[j, i]] = self.approximate(x, k)?;
            }
        }
        assemble(grid, ks, rk)
    }

    /// Parallel version of [`sample_rk`](Self::sample_rk) on the global
    /// rayon pool. This approximator's own cache is not touched.
    pub fn sample_rk_par(&self, ks: &[usize], opts: &CurveOptions) -> ExplicitResult<RkCurve> {
        let grid = self.prepare(ks, opts)?;
        let tables = Arc::clone(self.tables());
        let columns: Vec<Vec<f64>> = grid
            .to_vec()
            .into_par_iter()
            .map_init(
                || RiemannPiApproximation::from_tables(Arc::clone(&tables)),
                |worker, x| {
                    ks.iter()
                        .map(|&k| worker.approximate(x, k))
                        .collect::<ExplicitResult<Vec<f64>>>()
                },
            )
            .collect::<ExplicitResult<Vec<Vec<f64>>>>()?;

        let mut rk = Array2::zeros((ks.len(), grid.len()));
        for (i, column) in columns.iter().enumerate() {
            for (j, value) in column.iter().enumerate() {
                rk[[j, i]] = *value;
            }
        }
        assemble(grid, ks, rk)
    }

    fn prepare(&self, ks: &[usize], opts: &CurveOptions) -> ExplicitResult<Array1<f64>> {
        for &k in ks {
            check_k(k, self.kmax())?;
        }
        let grid = opts.grid(self.xmax())?;
        let upper = grid[grid.len() - 1];
        if upper > PRIME_PI_LIMIT {
            return Err(ExplicitError::InvalidPlotRange {
                xmin: opts.xmin,
                xmax: upper,
                reason: format!("xmax must be at most {PRIME_PI_LIMIT} for exact prime counts"),
            });
        }
        Ok(grid)
    }
}

fn assemble(grid: Array1<f64>, ks: &[usize], rk: Array2<f64>) -> ExplicitResult<RkCurve> {
    let prime_pi = Array1::from(prime_pi_many(&grid.to_vec())?);
    let li_values = grid.iter().map(|&x| li(x)).collect::<Result<Vec<f64>, _>>()?;
    Ok(RkCurve { x: grid, ks: ks.to_vec(), rk, prime_pi, li: Array1::from(li_values) })
}
