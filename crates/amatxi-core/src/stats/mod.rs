//! Statistics for the quit attempt in progress.
//!
//! Elapsed time breakdown, cigarettes avoided and money saved.

mod calculator;

pub use calculator::{compute_stats, elapsed_ms, lifetime_smoke_free_days, Stats};
