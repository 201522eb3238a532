//! explicit_formula::core — configuration, shared tables and memo caches.
//!
//! - [`config`]: validated `(kmax, xmax, precision)`.
//! - [`tables`]: read-only coefficient tables built once per configuration.
//! - [`memo`]: per-approximator caches of evaluated terms.

pub mod config;
pub mod memo;
pub mod tables;

pub use self::config::{ApproxConfig, DEFAULT_PRECISION};
pub use self::memo::{MemoStats, MemoTables};
pub use self::tables::ExplicitTables;
