//! MemoTables — per-approximator caches of evaluated terms.
//!
//! Purpose
//! -------
//! Remember every `R(x)`, `S_k(x)`, `T_k(x)` and `R_k(x)` computed by one
//! approximator, so repeated queries (and the inner loops of
//! `correction_term`) are answered without re-evaluating exponential
//! integrals.
//!
//! Key behaviors
//! -------------
//! - Keys use the bit pattern of `x` (`f64::to_bits`), so lookups are exact
//!   and a hit returns the bit-identical value stored on the first access.
//! - Caches only grow; nothing is ever invalidated because every cached
//!   value is a pure function of `(x, k)` for fixed tables.
//!
//! Invariants & assumptions
//! ------------------------
//! - Interior mutability through `RefCell`: the owning approximator is
//!   `!Sync` and must not be shared across threads. Parallel callers fork one
//!   approximator per worker instead.
//! - Borrows are held only for a single `get` or `insert`, never across a
//!   nested evaluation, so recursive fills cannot panic.
use std::{cell::RefCell, collections::HashMap};

/// Cache key for per-x tables.
pub type XKey = u64;
/// Cache key for per-(x, k) tables.
pub type XkKey = (u64, usize);

/// Cache key of `x`.
pub fn x_key(x: f64) -> XKey {
    x.to_bits()
}

/// Lazily filled caches for the four evaluated quantities.
#[derive(Debug, Default)]
pub struct MemoTables {
    /// `R(x)`.
    pub r: RefCell<HashMap<XKey, f64>>,
    /// `S_k(x)`.
    pub s: RefCell<HashMap<XkKey, f64>>,
    /// `T_k(x)`.
    pub t: RefCell<HashMap<XkKey, f64>>,
    /// `R_k(x)`.
    pub rk: RefCell<HashMap<XkKey, f64>>,
}

/// Entry counts of a [`MemoTables`] at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    pub r_entries: usize,
    pub s_entries: usize,
    pub t_entries: usize,
    pub rk_entries: usize,
}

impl MemoTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            r_entries: self.r.borrow().len(),
            s_entries: self.s.borrow().len(),
            t_entries: self.t.borrow().len(),
            rk_entries: self.rk.borrow().len(),
        }
    }
}

/// Look up `key`, or compute, store and return the value.
///
/// The borrow is released before `compute` runs, so `compute` may itself
/// read or fill the same table.
pub fn cached<K, E, F>(table: &RefCell<HashMap<K, f64>>, key: K, compute: F) -> Result<f64, E>
where
    K: std::hash::Hash + Eq,
    F: FnOnce() -> Result<f64, E>,
{
    if let Some(&value) = table.borrow().get(&key) {
        return Ok(value);
    }
    let value = compute()?;
    table.borrow_mut().insert(key, value);
    Ok(value)
}
