//! Riemann's explicit formula for π(x), truncated after k zero pairs.
//!
//! The approximation is
//!
//! ```text
//! R_k(x) = R(x) + S_k(x)
//! R(x)   = 1 + Σ_{n=1}^{precision-1} (ln x)^n / (n!·n·ζ(n+1))
//! S_k(x) = Σ_{n=1}^{N} μ(n) / (2 ln x) + atan(π / ln x) / π + Σ_{v=1}^{k} T_v(x)
//! T_v(x) = −Σ_{n=1}^{N} (μ(n)/n) · 2·Re Ei(ρ_v/n · ln x)
//! ```
//!
//! with `ρ_v = 1/2 + iγ_v` and `N = ⌊log2 xmax⌋`. Each `T_v` folds the
//! conjugate pair `ρ_v`, `ρ̄_v` into twice the real part.
//!
//! Key ideas:
//! - Everything that depends only on the configuration lives in an
//!   `Arc<ExplicitTables>`; [`RiemannPiApproximation::fork`] hands out a new
//!   approximator over the same tables with an empty cache.
//! - Every public evaluation is memoized per `x` (and `k`), keyed by the bit
//!   pattern of `x`.
//! - `S_k` is accumulated left to right over `T_1..T_k`, so consecutive
//!   corrections differ by exactly one zero term.
use std::{f64::consts::PI, fmt, sync::Arc};

use num_complex::Complex64;

use crate::{
    explicit_formula::{
        core::{
            config::ApproxConfig,
            memo::{MemoStats, MemoTables, cached, x_key},
            tables::ExplicitTables,
        },
        errors::ExplicitResult,
        validation::{check_k, check_x, check_x_regular},
    },
    special::{expint::ei, zeros::TabulatedZeros, zeros::ZetaZeroOracle},
};

/// Evaluator of `R(x)`, `S_k(x)`, `T_k(x)` and `R_k(x)` for `0 < x <= xmax`,
/// `1 <= k <= kmax`.
///
/// # Notes
/// - `!Sync`: the memo tables use `RefCell`. Use [`fork`](Self::fork) to
///   give each thread its own approximator over the shared tables.
/// - `x = 1` is accepted by [`base_term`](Self::base_term) (`R(1) = 1`) and
///   rejected by the zero corrections, where `ln x = 0`.
#[derive(Debug)]
pub struct RiemannPiApproximation {
    tables: Arc<ExplicitTables>,
    memo: MemoTables,
}

impl RiemannPiApproximation {
    /// Build an approximator using the embedded table of zeta zeros.
    ///
    /// # Errors
    /// - Configuration errors from [`ApproxConfig::new`].
    /// - `ExplicitError::ZeroTableExhausted` if `kmax` exceeds the 1000
    ///   tabulated zeros.
    pub fn new(kmax: usize, xmax: f64, precision: Option<usize>) -> ExplicitResult<Self> {
        let config = ApproxConfig::new(kmax, xmax, precision)?;
        let oracle = TabulatedZeros::builtin()?;
        Self::with_oracle(config, &oracle)
    }

    /// Build an approximator taking the first `kmax` zeros from `oracle`.
    pub fn with_oracle(config: ApproxConfig, oracle: &dyn ZetaZeroOracle) -> ExplicitResult<Self> {
        let tables = ExplicitTables::build(config, oracle)?;
        Ok(Self::from_tables(Arc::new(tables)))
    }

    /// Wrap already-built tables with an empty cache.
    pub fn from_tables(tables: Arc<ExplicitTables>) -> Self {
        RiemannPiApproximation { tables, memo: MemoTables::new() }
    }

    /// A new approximator sharing this one's tables, with an empty cache.
    pub fn fork(&self) -> Self {
        Self::from_tables(Arc::clone(&self.tables))
    }

    pub fn config(&self) -> &ApproxConfig {
        self.tables.config()
    }

    pub fn tables(&self) -> &Arc<ExplicitTables> {
        &self.tables
    }

    pub fn kmax(&self) -> usize {
        self.tables.config().kmax()
    }

    pub fn xmax(&self) -> f64 {
        self.tables.config().xmax()
    }

    /// Current cache sizes.
    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }

    /// `R(x)`, Riemann's smooth approximation to π(x).
    ///
    /// # Errors
    /// - `ExplicitError::XOutOfRange` unless `0 < x <= xmax`.
    pub fn base_term(&self, x: f64) -> ExplicitResult<f64> {
        check_x(x, self.xmax())?;
        cached(&self.memo.r, x_key(x), || Ok(self.gram_series(x)))
    }

    /// `S_k(x)`, the Möbius-weighted trivial terms plus the first `k`
    /// zero-pair corrections.
    ///
    /// # Errors
    /// - `ExplicitError::XOutOfRange` / `XAtSingularity` unless
    ///   `0 < x <= xmax` and `x != 1`.
    /// - `ExplicitError::KOutOfRange` unless `1 <= k <= kmax`.
    pub fn correction_term(&self, x: f64, k: usize) -> ExplicitResult<f64> {
        check_x_regular(x, self.xmax())?;
        check_k(k, self.kmax())?;
        cached(&self.memo.s, (x_key(x), k), || {
            let mut total = self.trivial_terms(x);
            for v in 1..=k {
                total += self.single_zero_term(x, v)?;
            }
            Ok(total)
        })
    }

    /// `T_k(x)`, the contribution of the k-th zero pair `ρ_k`, `ρ̄_k`.
    ///
    /// # Errors
    /// - Same range errors as [`correction_term`](Self::correction_term).
    /// - `ExplicitError::OracleFailure` if an exponential integral fails to
    ///   converge.
    pub fn single_zero_term(&self, x: f64, k: usize) -> ExplicitResult<f64> {
        check_x_regular(x, self.xmax())?;
        check_k(k, self.kmax())?;
        cached(&self.memo.t, (x_key(x), k), || {
            let ln_x = x.ln();
            let mut sum = 0.0;
            for n in 1..=self.tables.n_terms() {
                let mu = self.tables.mobius()[n];
                if mu == 0.0 {
                    continue;
                }
                let arg: Complex64 = self.tables.rho_over_n()[[k, n]] * ln_x;
                sum += (mu / n as f64) * 2.0 * ei(arg)?.re;
            }
            Ok(-sum)
        })
    }

    /// `R_k(x) = R(x) + S_k(x)`.
    ///
    /// # Errors
    /// - Same as [`correction_term`](Self::correction_term).
    pub fn approximate(&self, x: f64, k: usize) -> ExplicitResult<f64> {
        check_x_regular(x, self.xmax())?;
        check_k(k, self.kmax())?;
        cached(&self.memo.rk, (x_key(x), k), || {
            Ok(self.base_term(x)? + self.correction_term(x, k)?)
        })
    }

    // ---- Helper Methods ----

    fn gram_series(&self, x: f64) -> f64 {
        let y = x.ln();
        let coeffs = self.tables.series_coeffs();
        let mut total = 1.0;
        let mut power = y;
        for n in 1..coeffs.len() {
            total += coeffs[n] * power;
            power *= y;
        }
        total
    }

    /// `Σ μ(n) / (2 ln x) + atan(π / ln x) / π`.
    fn trivial_terms(&self, x: f64) -> f64 {
        let ln_x = x.ln();
        self.tables.mobius_running_sum() / (2.0 * ln_x) + (PI / ln_x).atan() / PI
    }
}

impl fmt::Display for RiemannPiApproximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Riemann explicit formula for pi(x) for x <= {} using R_k for k <= {}",
            self.xmax(),
            self.kmax()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explicit_formula::errors::ExplicitError;
    use crate::special::zeros::{ComputedZeros, ZeroSearchOptions};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Reference values of R, S_k, T_k and R_k for small configurations.
    // - Structural identities: S_k − S_{k−1} = T_k and R_k = R + S_k.
    // - Memoization (bit-identical repeats, cache growth, fork isolation).
    // - Range handling at the bounds, at x = 1 and below 1.
    // - Construction through an explicit zero oracle.
    // -------------------------------------------------------------------------

    fn approx_10_100() -> RiemannPiApproximation {
        RiemannPiApproximation::new(10, 100.0, None).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Reproduce the documented value of R_10(100).
    //
    // Given
    // -----
    // - kmax = 10, xmax = 100, default precision.
    //
    // Expect
    // ------
    // - R(100) ≈ 25.661633266924188 and R_10(100) ≈ 25.3364299527.
    fn approximate_matches_reference_at_hundred() {
        // Arrange
        let approx = approx_10_100();

        // Act
        let r = approx.base_term(100.0).unwrap();
        let r10 = approx.approximate(100.0, 10).unwrap();

        // Assert
        assert_relative_eq!(r, 25.661633266924188, max_relative = 1e-12);
        assert_abs_diff_eq!(r10, 25.3364299527, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Check individual zero terms and the full correction.
    //
    // Given
    // -----
    // - kmax = 10, xmax = 100, x = 100.
    //
    // Expect
    // ------
    // - T_1 ≈ -0.06193953670486779, T_10 ≈ 0.04080407308186951,
    //   S_10 ≈ -0.3252033149859056.
    fn zero_terms_match_reference_values() {
        // Arrange
        let approx = approx_10_100();

        // Act
        let t1 = approx.single_zero_term(100.0, 1).unwrap();
        let t10 = approx.single_zero_term(100.0, 10).unwrap();
        let s10 = approx.correction_term(100.0, 10).unwrap();

        // Assert
        assert_abs_diff_eq!(t1, -0.06193953670486779, epsilon = 1e-9);
        assert_abs_diff_eq!(t10, 0.04080407308186951, epsilon = 1e-9);
        assert_abs_diff_eq!(s10, -0.3252033149859056, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Consecutive corrections differ by exactly one zero term, and R_k is
    // the sum of its parts.
    //
    // Given
    // -----
    // - kmax = 10, xmax = 100, x ∈ {2, 37.5, 100}, k = 2..=10.
    //
    // Expect
    // ------
    // - S_k − S_{k−1} = T_k to rounding; R_k == R + S_k exactly.
    fn corrections_telescope_and_sum() {
        // Arrange
        let approx = approx_10_100();

        // Act / Assert
        for x in [2.0, 37.5, 100.0] {
            for k in 2..=10 {
                let diff = approx.correction_term(x, k).unwrap()
                    - approx.correction_term(x, k - 1).unwrap();
                let t = approx.single_zero_term(x, k).unwrap();
                assert_abs_diff_eq!(diff, t, epsilon = 1e-12);

                let rk = approx.approximate(x, k).unwrap();
                let sum = approx.base_term(x).unwrap() + approx.correction_term(x, k).unwrap();
                assert_eq!(rk, sum);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Repeated queries return bit-identical values from the cache.
    //
    // Given
    // -----
    // - Two calls each of base_term(50) and approximate(50, 3).
    //
    // Expect
    // ------
    // - Equal bit patterns; one R entry, three T entries, one S and one
    //   R_k entry.
    fn repeated_queries_hit_the_cache() {
        // Arrange
        let approx = approx_10_100();

        // Act
        let a = approx.base_term(50.0).unwrap();
        let b = approx.base_term(50.0).unwrap();
        let c = approx.approximate(50.0, 3).unwrap();
        let d = approx.approximate(50.0, 3).unwrap();

        // Assert
        assert_eq!(a.to_bits(), b.to_bits());
        assert_eq!(c.to_bits(), d.to_bits());
        assert_eq!(
            approx.memo_stats(),
            MemoStats { r_entries: 1, s_entries: 1, t_entries: 3, rk_entries: 1 }
        );
    }

    #[test]
    // Purpose
    // -------
    // A fork shares tables but starts with an empty cache and agrees with
    // its parent.
    //
    // Given
    // -----
    // - A parent that already evaluated R_5(80), and its fork.
    //
    // Expect
    // ------
    // - Same `Arc`, empty fork cache before the query, equal values after.
    fn fork_shares_tables_not_cache() {
        // Arrange
        let parent = approx_10_100();
        let from_parent = parent.approximate(80.0, 5).unwrap();

        // Act
        let child = parent.fork();
        let before = child.memo_stats();
        let from_child = child.approximate(80.0, 5).unwrap();

        // Assert
        assert!(Arc::ptr_eq(parent.tables(), child.tables()));
        assert_eq!(before, MemoStats::default());
        assert_eq!(from_parent.to_bits(), from_child.to_bits());
    }

    #[test]
    // Purpose
    // -------
    // Bounds are inclusive at xmax and kmax and exclusive beyond.
    //
    // Given
    // -----
    // - kmax = 10, xmax = 100.
    //
    // Expect
    // ------
    // - approximate(100, 10) succeeds.
    // - approximate(100.01, 1), approximate(2, 11) and approximate(2, 0)
    //   fail with range errors and leave the caches empty.
    fn range_errors_at_bounds() {
        // Arrange
        let approx = approx_10_100();

        // Act
        let inside = approx.approximate(100.0, 10);
        let fresh = approx.fork();
        let errors = [
            fresh.approximate(100.0 * 1.0001, 1),
            fresh.approximate(2.0, 11),
            fresh.approximate(2.0, 0),
            fresh.single_zero_term(2.0, 0),
            fresh.correction_term(2.0, 0),
        ];

        // Assert
        assert!(inside.is_ok());
        for result in errors {
            match result {
                Err(e) => assert!(e.is_range(), "expected range error, got {e:?}"),
                Ok(v) => panic!("expected range error, got {v}"),
            }
        }
        assert_eq!(fresh.memo_stats(), MemoStats::default());
    }

    #[test]
    // Purpose
    // -------
    // x = 1 is fine for R(x) and singular for every zero correction.
    //
    // Given
    // -----
    // - x = 1.
    //
    // Expect
    // ------
    // - base_term(1) = 1; S, T and R_k return `XAtSingularity`.
    fn x_equal_one_is_singular_for_corrections() {
        // Arrange
        let approx = approx_10_100();

        // Act / Assert
        assert_eq!(approx.base_term(1.0).unwrap(), 1.0);
        let singular = ExplicitError::XAtSingularity { x: 1.0 };
        assert_eq!(approx.correction_term(1.0, 1), Err(singular.clone()));
        assert_eq!(approx.single_zero_term(1.0, 1), Err(singular.clone()));
        assert_eq!(approx.approximate(1.0, 1), Err(singular));
    }

    #[test]
    // Purpose
    // -------
    // Queries below 1 and down to the smallest tabulated grid point are
    // evaluated by the same formulas.
    //
    // Given
    // -----
    // - kmax = 50, xmax = 500.
    //
    // Expect
    // ------
    // - R_2(0.5) ≈ 1.6555714891438347, R_1(2) ≈ 0.5622284406157787,
    //   R_5(37.5) ≈ 11.485849473138687, R_50(500) ≈ 94.99297060205788.
    fn approximate_matches_reference_across_range() {
        // Arrange
        let approx = RiemannPiApproximation::new(50, 500.0, None).unwrap();

        // Act / Assert
        assert_abs_diff_eq!(approx.approximate(0.5, 2).unwrap(), 1.6555714891438347, epsilon = 1e-9);
        assert_abs_diff_eq!(approx.approximate(2.0, 1).unwrap(), 0.5622284406157787, epsilon = 1e-9);
        assert_abs_diff_eq!(
            approx.approximate(37.5, 5).unwrap(),
            11.485849473138687,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            approx.approximate(500.0, 50).unwrap(),
            94.99297060205788,
            epsilon = 1e-8
        );
    }

    #[test]
    // Purpose
    // -------
    // Construction fails cleanly for invalid knobs and an exhausted table.
    //
    // Given
    // -----
    // - kmax = 0; xmax = 1.5; precision = 0; kmax = 1001.
    //
    // Expect
    // ------
    // - Configuration errors, with `ZeroTableExhausted` for kmax = 1001.
    fn construction_errors_are_config_kind() {
        // Act
        let results = [
            RiemannPiApproximation::new(0, 100.0, None),
            RiemannPiApproximation::new(1, 1.5, None),
            RiemannPiApproximation::new(1, 100.0, Some(0)),
            RiemannPiApproximation::new(1001, 100.0, None),
        ];

        // Assert
        for result in &results {
            match result {
                Err(e) => assert!(e.is_config(), "expected config error, got {e:?}"),
                Ok(a) => panic!("expected config error, got {a}"),
            }
        }
        match &results[3] {
            Err(ExplicitError::ZeroTableExhausted { requested: 1001, available: 1000 }) => (),
            other => panic!("expected ZeroTableExhausted, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Zeros located by the Hardy-Z search give the same approximation as
    // the embedded table.
    //
    // Given
    // -----
    // - kmax = 5, xmax = 100, computed and tabulated oracles.
    //
    // Expect
    // ------
    // - R_5(100) agrees to 1e-8.
    fn computed_oracle_agrees_with_table() {
        // Arrange
        let config = ApproxConfig::new(5, 100.0, None).unwrap();
        let computed = ComputedZeros::new(ZeroSearchOptions::default());
        let a = RiemannPiApproximation::with_oracle(config, &computed).unwrap();
        let b = RiemannPiApproximation::new(5, 100.0, None).unwrap();

        // Act
        let va = a.approximate(100.0, 5).unwrap();
        let vb = b.approximate(100.0, 5).unwrap();

        // Assert
        assert_abs_diff_eq!(va, vb, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // The textual summary names both bounds.
    //
    // Given
    // -----
    // - kmax = 10, xmax = 100.
    //
    // Expect
    // ------
    // - The fixed phrase with "x <= 100" and "k <= 10".
    fn display_names_bounds() {
        // Act
        let text = approx_10_100().to_string();

        // Assert
        assert_eq!(text, "Riemann explicit formula for pi(x) for x <= 100 using R_k for k <= 10");
    }
}
