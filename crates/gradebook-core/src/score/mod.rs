//! Score storage and statistics.
//!
//! This module contains the working set for one analysis cycle:
//! - `ScoreRecord`, `ScoreStore` - name/score records in entry order
//! - `stats` - mean, median, max, min over a store

mod store;

pub mod stats;

pub use store::*;
