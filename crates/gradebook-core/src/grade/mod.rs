//! Letter grading over a score store.
//!
//! This module contains the grading types and operations:
//! - `Grade` - letter grades (A, B, C, D, F)
//! - `GradeSheet`, `GradeHistogram` - per-student grades and bucket counts
//! - `pass_fail` - pass/fail partition at the fixed threshold

mod letter;
mod pass_fail;
mod sheet;

pub use letter::*;
pub use pass_fail::*;
pub use sheet::*;
