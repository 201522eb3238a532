//! explicit_formula — Riemann's explicit formula for the prime-counting function.
//!
//! Purpose
//! -------
//! Evaluate `R_k(x) = R(x) + S_k(x)`, the smooth approximation `R(x)` to
//! π(x) corrected by the first `k` pairs of nontrivial zeta zeros, for
//! `0 < x <= xmax` and `1 <= k <= kmax`, with every evaluated term cached.
//!
//! Key behaviors
//! -------------
//! - [`core`] holds the validated configuration ([`ApproxConfig`]), the
//!   read-only coefficient tables ([`ExplicitTables`]) and the per-instance
//!   caches ([`MemoTables`]).
//! - [`approximation`] defines [`RiemannPiApproximation`] with
//!   `base_term` (R), `correction_term` (S_k), `single_zero_term` (T_k) and
//!   `approximate` (R_k).
//! - [`curve`] samples `R_k` on a grid for plotting, sequentially or with
//!   rayon, alongside π(x) and li(x).
//! - [`errors`] classifies failures as configuration or range errors.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tables are built once at construction and never change; every cached
//!   value is a pure function of `(x, k)`.
//! - Out-of-range queries fail before touching the caches.
//! - An approximator is single-threaded (`RefCell` caches); parallel work
//!   forks one approximator per worker over the shared `Arc` tables.
//!
//! Conventions
//! -----------
//! - Zeros are indexed from 1 in ascending order of ordinate; `k` counts
//!   conjugate pairs.
//! - `N = ⌊log2 xmax⌋` Möbius terms are used for every query, independent of
//!   the queried x.
//!
//! Downstream usage
//! ----------------
//! - Build with `RiemannPiApproximation::new(kmax, xmax, None)` for the
//!   embedded zero table, or `with_oracle` for a custom
//!   [`ZetaZeroOracle`](crate::special::ZetaZeroOracle).
//! - Python bindings expose the same methods under the short names
//!   `R`, `Sk`, `Tk` and `Rk`.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover reference values, identities
//!   between the terms, cache behavior and every error branch; the
//!   integration test drives the public surface end to end.

pub mod approximation;
pub mod core;
pub mod curve;
pub mod errors;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::approximation::RiemannPiApproximation;
pub use self::core::{ApproxConfig, DEFAULT_PRECISION, ExplicitTables, MemoStats, MemoTables};
pub use self::curve::{CurveOptions, RkCurve};
pub use self::errors::{ErrorKind, ExplicitError, ExplicitResult};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{
        ApproxConfig, CurveOptions, ErrorKind, ExplicitError, ExplicitResult,
        RiemannPiApproximation, RkCurve,
    };
}
