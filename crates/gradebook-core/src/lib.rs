pub mod error;
pub mod grade;
pub mod input;
pub mod report;
pub mod score;

pub use error::{Error, Result};
pub use grade::{
    grade_all, pass_fail, Grade, GradeHistogram, GradeSheet, PassFailSummary, PASS_THRESHOLD,
};
pub use input::{load_csv, manual_entry, CsvLoad, Prompter, SkipReason, SkippedRow};
pub use score::{ScoreRecord, ScoreStore, MAX_SCORE};
