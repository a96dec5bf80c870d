//! Score acquisition.
//!
//! Two ways to build a `ScoreStore`:
//! - `manual_entry` - interactive prompts through a `Prompter`
//! - `load_csv` - two-column CSV file with a header row

mod csv;
mod manual;

pub use csv::*;
pub use manual::*;
