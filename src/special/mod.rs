//! special — double-precision numerical oracles for the explicit formula.
//!
//! Purpose
//! -------
//! Collect the number-theoretic and special-function building blocks that
//! the explicit formula consumes: the zeta function, the complex exponential
//! integral, zeta-zero ordinates, and the Möbius and prime-counting
//! functions.
//!
//! Key behaviors
//! -------------
//! - [`zeta`] evaluates ζ(s) by Euler–Maclaurin summation; [`hardy_z`] and
//!   [`riemann_siegel_theta`] support the zero search.
//! - [`ei`] evaluates Ei(z) for complex z (power series near the origin,
//!   and around the positive real axis, continued fraction elsewhere);
//!   [`li`] is its real restriction.
//! - [`ZetaZeroOracle`] abstracts the source of ordinates, with the embedded
//!   [`TabulatedZeros`] and the search-based [`ComputedZeros`].
//! - [`moebius`] and [`prime_pi_many`] wrap `num-prime`.
//!
//! Conventions
//! -----------
//! - Every fallible oracle returns [`OracleResult`]; no function here
//!   panics or returns NaN for a bad argument.
//! - This layer knows nothing about `kmax`/`xmax`; range checks against the
//!   approximator configuration live in `explicit_formula`.

pub mod arithmetic;
pub mod errors;
pub mod expint;
pub mod zeros;
pub mod zeta;

pub use self::arithmetic::{PRIME_PI_LIMIT, moebius, moebius_table, prime_pi, prime_pi_many};
pub use self::errors::{OracleError, OracleResult};
pub use self::expint::{ei, li};
pub use self::zeros::{ComputedZeros, TabulatedZeros, ZeroSearchOptions, ZetaZeroOracle};
pub use self::zeta::{hardy_z, riemann_siegel_theta, zeta, zeta_abs_at_integer};

pub mod prelude {
    pub use super::{
        ComputedZeros, OracleError, OracleResult, TabulatedZeros, ZeroSearchOptions,
        ZetaZeroOracle, ei, hardy_z, li, moebius, prime_pi, prime_pi_many, zeta,
    };
}
