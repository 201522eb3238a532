//! ExplicitTables — read-only coefficient tables shared by approximators.
//!
//! Purpose
//! -------
//! Precompute everything that depends only on the configuration, so that a
//! query costs O(N) exponential-integral evaluations (zero terms) or
//! O(precision) multiply-adds (`R(x)`).
//!
//! Key behaviors
//! -------------
//! - `rho[k] = 1/2 + iγ_k` for `k = 1..=kmax`; slot 0 is a zero placeholder
//!   so the index matches the correction index.
//! - `rho_over_n[[k, n]] = rho[k] / n` for `n = 1..=N`; row 0 and column 0
//!   are unused.
//! - `mobius[n] = μ(n)` for `n = 0..=N+1` with μ(0) = 0, and
//!   `mobius_running_sum = Σ_{n=1}^{N} μ(n)`.
//! - `series_coeffs[0] = 1`, `series_coeffs[n] = 1/(n!·n·ζ(n+1))` for
//!   `n = 1..precision`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `N = ⌊ln xmax / ln 2⌋ ≥ 1`.
//! - Built once per configuration and never mutated; shared behind `Arc`
//!   by every approximator forked from the same configuration.
//!
//! Testing notes
//! -------------
//! - Unit tests check table shapes, the Möbius bookkeeping and the first
//!   series coefficients against closed forms.
use ndarray::{Array1, Array2, s};
use num_complex::Complex64;

use crate::{
    explicit_formula::{
        core::config::ApproxConfig,
        errors::{ExplicitError, ExplicitResult},
    },
    special::{arithmetic::moebius_table, zeros::ZetaZeroOracle, zeta::zeta_abs_at_integer},
};

/// Precomputed tables for one [`ApproxConfig`].
///
/// Only [`ExplicitTables::build`] creates tables, so every shape below
/// agrees with `config`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitTables {
    config: ApproxConfig,
    /// `N`, the number of Möbius terms per zero correction.
    n_terms: usize,
    /// `rho[k] = 1/2 + iγ_k`, length `kmax + 1`.
    rho: Vec<Complex64>,
    /// `rho[k] / n`, shape `(kmax + 1, N + 1)`.
    rho_over_n: Array2<Complex64>,
    /// `μ(n)` for `n = 0..=N+1`.
    mobius: Array1<f64>,
    /// `Σ_{n=1}^{N} μ(n)`.
    mobius_running_sum: f64,
    /// Gram-series coefficients for `R(x)`, length `precision`.
    series_coeffs: Array1<f64>,
}

impl ExplicitTables {
    /// Build the tables, taking the first `kmax` ordinates from `oracle`.
    ///
    /// # Errors
    /// - `ExplicitError::ZeroTableExhausted` if the oracle holds fewer than
    ///   `kmax` zeros, or hands back fewer than it was asked for.
    /// - `ExplicitError::OracleFailure` for any other oracle failure.
    pub fn build(config: ApproxConfig, oracle: &dyn ZetaZeroOracle) -> ExplicitResult<Self> {
        let kmax = config.kmax();
        let n_terms = config.n_terms();
        let ordinates = oracle.ordinates(kmax)?;
        if ordinates.len() < kmax {
            return Err(ExplicitError::ZeroTableExhausted {
                requested: kmax,
                available: ordinates.len(),
            });
        }

        let mut rho = Vec::with_capacity(kmax + 1);
        rho.push(Complex64::new(0.0, 0.0));
        rho.extend(ordinates.iter().take(kmax).map(|&gamma| Complex64::new(0.5, gamma)));

        let mut rho_over_n = Array2::from_elem((kmax + 1, n_terms + 1), Complex64::new(0.0, 0.0));
        for k in 1..=kmax {
            for n in 1..=n_terms {
                rho_over_n[[k, n]] = rho[k] / n as f64;
            }
        }

        let mobius = moebius_table(n_terms + 1);
        let mobius_running_sum = mobius.slice(s![1..=n_terms]).sum();
        let series_coeffs = gram_coefficients(config.precision())?;

        Ok(ExplicitTables {
            config,
            n_terms,
            rho,
            rho_over_n,
            mobius,
            mobius_running_sum,
            series_coeffs,
        })
    }

    pub fn config(&self) -> &ApproxConfig {
        &self.config
    }

    /// `N`, the number of Möbius terms per zero correction.
    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    /// `1/2 + iγ_k` for `k = 1..=kmax`; index 0 is a placeholder.
    pub fn rho(&self) -> &[Complex64] {
        &self.rho
    }

    /// `ρ_k / n`, shape `(kmax + 1, N + 1)`.
    pub fn rho_over_n(&self) -> &Array2<Complex64> {
        &self.rho_over_n
    }

    /// `μ(n)` for `n = 0..=N+1`.
    pub fn mobius(&self) -> &Array1<f64> {
        &self.mobius
    }

    pub fn mobius_running_sum(&self) -> f64 {
        self.mobius_running_sum
    }

    /// Gram-series coefficients, length `precision`.
    pub fn series_coeffs(&self) -> &Array1<f64> {
        &self.series_coeffs
    }
}

/// `[1, 1/(1!·1·ζ(2)), 1/(2!·2·ζ(3)), …]`, `precision` entries.
fn gram_coefficients(precision: usize) -> ExplicitResult<Array1<f64>> {
    let mut coeffs = Array1::zeros(precision);
    coeffs[0] = 1.0;
    let mut factorial = 1.0_f64;
    for n in 1..precision {
        factorial *= n as f64;
        let zeta = zeta_abs_at_integer(n as u32 + 1)?;
        coeffs[n] = 1.0 / (factorial * n as f64 * zeta);
    }
    Ok(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explicit_formula::errors::ExplicitError;
    use crate::special::zeros::TabulatedZeros;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Shapes and index conventions of the zero tables.
    // - Möbius table contents and running sum.
    // - Leading Gram-series coefficients.
    // - Oracle exhaustion at build time.
    // -------------------------------------------------------------------------

    fn tables(kmax: usize, xmax: f64, precision: usize) -> ExplicitTables {
        let config = ApproxConfig::new(kmax, xmax, Some(precision)).unwrap();
        ExplicitTables::build(config, &TabulatedZeros::builtin().unwrap()).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Zero tables follow the 1-based index convention.
    //
    // Given
    // -----
    // - kmax = 10, xmax = 100 (N = 6).
    //
    // Expect
    // ------
    // - `rho` has 11 entries with `rho[0] = 0` and `rho[1] = 1/2 + iγ₁`.
    // - `rho_over_n` has shape (11, 7) and `rho_over_n[[3, 2]] = rho[3]/2`.
    fn zero_tables_are_one_based() {
        // Act
        let t = tables(10, 100.0, 50);

        // Assert
        assert_eq!(t.n_terms, 6);
        assert_eq!(t.rho.len(), 11);
        assert_eq!(t.rho[0], Complex64::new(0.0, 0.0));
        assert_eq!(t.rho[1].re, 0.5);
        assert_relative_eq!(t.rho[1].im, 14.134725142, max_relative = 1e-12);
        assert_eq!(t.rho_over_n.dim(), (11, 7));
        assert_eq!(t.rho_over_n[[3, 2]], t.rho[3] / 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the Möbius table and its running sum.
    //
    // Given
    // -----
    // - xmax = 100, so N = 6 and the table covers n = 0..=7.
    //
    // Expect
    // ------
    // - μ = [0, 1, -1, -1, 0, -1, 1, -1] and Σ_{n=1}^{6} μ(n) = -1.
    fn mobius_table_and_running_sum() {
        // Act
        let t = tables(1, 100.0, 5);

        // Assert
        assert_eq!(t.mobius.to_vec(), vec![0.0, 1.0, -1.0, -1.0, 0.0, -1.0, 1.0, -1.0]);
        assert_eq!(t.mobius_running_sum, -1.0);
    }

    #[test]
    // Purpose
    // -------
    // The first Gram coefficients match their closed forms.
    //
    // Given
    // -----
    // - precision = 3.
    //
    // Expect
    // ------
    // - coeffs = [1, 6/π², 1/(4·ζ(3))].
    fn gram_coefficients_match_closed_forms() {
        // Act
        let t = tables(1, 100.0, 3);

        // Assert
        let pi2 = std::f64::consts::PI * std::f64::consts::PI;
        assert_eq!(t.series_coeffs.len(), 3);
        assert_eq!(t.series_coeffs[0], 1.0);
        assert_relative_eq!(t.series_coeffs[1], 6.0 / pi2, max_relative = 1e-14);
        assert_relative_eq!(
            t.series_coeffs[2],
            1.0 / (4.0 * 1.2020569031595942),
            max_relative = 1e-14
        );
    }

    #[test]
    // Purpose
    // -------
    // A zero table shorter than kmax fails the build.
    //
    // Given
    // -----
    // - A 3-entry table and kmax = 5.
    //
    // Expect
    // ------
    // - `ZeroTableExhausted { requested: 5, available: 3 }`.
    fn build_fails_when_oracle_is_short() {
        // Arrange
        let config = ApproxConfig::new(5, 100.0, None).unwrap();
        let oracle = TabulatedZeros::from_ordinates(vec![14.1, 21.0, 25.0]).unwrap();

        // Act
        let result = ExplicitTables::build(config, &oracle);

        // Assert
        assert_eq!(result, Err(ExplicitError::ZeroTableExhausted { requested: 5, available: 3 }));
    }

    /// Oracle that ignores `count` and always returns two ordinates.
    struct TwoZeros;

    impl ZetaZeroOracle for TwoZeros {
        fn ordinates(&self, _count: usize) -> crate::special::OracleResult<Vec<f64>> {
            Ok(vec![14.134725141735, 21.022039638772])
        }
    }

    #[test]
    // Purpose
    // -------
    // A custom oracle that returns fewer ordinates than requested cannot
    // produce tables whose shape disagrees with the configuration.
    //
    // Given
    // -----
    // - An oracle that always returns two ordinates; kmax = 4, then kmax = 2.
    //
    // Expect
    // ------
    // - kmax = 4: `ZeroTableExhausted { requested: 4, available: 2 }`.
    // - kmax = 2: accessors report shapes matching the configuration.
    fn build_checks_oracle_output_against_config() {
        // Arrange
        let short = ApproxConfig::new(4, 100.0, None).unwrap();
        let exact = ApproxConfig::new(2, 100.0, None).unwrap();

        // Act
        let rejected = ExplicitTables::build(short, &TwoZeros);
        let built = ExplicitTables::build(exact, &TwoZeros).unwrap();

        // Assert
        assert_eq!(
            rejected,
            Err(ExplicitError::ZeroTableExhausted { requested: 4, available: 2 })
        );
        assert_eq!(built.config(), &exact);
        assert_eq!(built.rho().len(), exact.kmax() + 1);
        assert_eq!(built.rho_over_n().dim(), (exact.kmax() + 1, built.n_terms() + 1));
        assert_eq!(built.mobius().len(), built.n_terms() + 2);
        assert_eq!(built.series_coeffs().len(), exact.precision());
        assert_eq!(built.mobius_running_sum(), -1.0);
    }
}
