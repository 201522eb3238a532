//! Arithmetic helpers: the Möbius function and prime counting.
//!
//! Both lean on `num-prime` for factorization and primality. The Möbius
//! table has `⌊log2 xmax⌋ + 2` entries; prime counts are streamed and never
//! tabulated per integer.
use ndarray::Array1;
use num_prime::nt_funcs::{factorize64, is_prime64, moebius_factorized};

use crate::special::errors::{OracleError, OracleResult};

/// Möbius function μ(n), with the convention μ(0) = 0.
pub fn moebius(n: u64) -> i8 {
    match n {
        0 => 0,
        1 => 1,
        _ => moebius_factorized(&factorize64(n)),
    }
}

/// `[μ(0), μ(1), …, μ(last)]` as floats.
pub fn moebius_table(last: usize) -> Array1<f64> {
    Array1::from_iter((0..=last as u64).map(|n| f64::from(moebius(n))))
}

/// Largest x accepted by the exact prime counts.
pub const PRIME_PI_LIMIT: f64 = 1e7;

/// π(x) at every entry of `xs`, in input order.
///
/// The counts stream through the integers up to the largest entry once,
/// testing each with `is_prime64`, so memory stays proportional to
/// `xs.len()`. Entries below 2 count as 0.
///
/// # Errors
/// - [`OracleError::InvalidArgument`] for a NaN entry or one above
///   [`PRIME_PI_LIMIT`].
pub fn prime_pi_many(xs: &[f64]) -> OracleResult<Vec<u64>> {
    for &x in xs {
        if x.is_nan() || x > PRIME_PI_LIMIT {
            return Err(OracleError::InvalidArgument {
                function: "prime_pi",
                value: x,
                reason: "x must be a number no larger than PRIME_PI_LIMIT.",
            });
        }
    }
    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));

    let mut counts = vec![0u64; xs.len()];
    let mut n = 1u64;
    let mut running = 0u64;
    for idx in order {
        let target = xs[idx].max(0.0).floor() as u64;
        while n < target {
            n += 1;
            if is_prime64(n) {
                running += 1;
            }
        }
        counts[idx] = running;
    }
    Ok(counts)
}

/// π(x) for a single real `x`.
///
/// # Errors
/// - As [`prime_pi_many`].
pub fn prime_pi(x: f64) -> OracleResult<u64> {
    Ok(prime_pi_many(&[x])?[0])
}
