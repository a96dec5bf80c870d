use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::score::{ScoreStore, MAX_SCORE};

/// Why a CSV row was skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than two comma-separated fields.
    TooFewFields,
    /// The score field did not parse as an integer.
    InvalidScore,
    /// The score parsed but fell outside 0..=100.
    OutOfRange(i64),
}

/// One skipped row, with its 1-based line number in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub name: String,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            SkipReason::TooFewFields => {
                write!(f, "Skipping line {}: not enough data.", self.line)
            }
            SkipReason::InvalidScore => {
                write!(f, "Skipping {}: invalid mark value.", self.name)
            }
            SkipReason::OutOfRange(value) => {
                write!(f, "Skipping {}: mark {} out of range.", self.name, value)
            }
        }
    }
}

/// Result of loading a CSV file: the accepted records plus every row that was
/// skipped. Skipped rows never abort the load.
#[derive(Debug, Default)]
pub struct CsvLoad {
    pub store: ScoreStore,
    pub skipped: Vec<SkippedRow>,
}

/// Load name/score records from a CSV file.
///
/// The first line is a header and is discarded. Every other line needs at
/// least two comma-separated fields: a name and an integer score in 0..=100.
/// Fields beyond the first two are ignored; name and score are trimmed.
/// Malformed rows are recorded in `CsvLoad::skipped` and loading continues.
///
/// A missing file is `Error::FileNotFound`; any other read failure is
/// `Error::Io`. Neither is fatal to the caller's menu loop.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<CsvLoad> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    let mut load = CsvLoad::default();

    // Line 1 is the header (assumed: Name, Mark).
    for (index, line) in content.lines().enumerate().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            load.skip(index + 1, String::new(), SkipReason::TooFewFields);
            continue;
        }

        let name = fields[0].trim();
        match fields[1].trim().parse::<i64>() {
            Ok(value) if (0..=i64::from(MAX_SCORE)).contains(&value) => {
                load.store.insert(name, value as u32);
            }
            Ok(value) => load.skip(index + 1, name.to_string(), SkipReason::OutOfRange(value)),
            Err(_) => load.skip(index + 1, name.to_string(), SkipReason::InvalidScore),
        }
    }

    info!(
        "Loaded {} student records from {} ({} skipped)",
        load.store.len(),
        path.display(),
        load.skipped.len()
    );

    Ok(load)
}

impl CsvLoad {
    fn skip(&mut self, line: usize, name: String, reason: SkipReason) {
        debug!("skipping line {line}: {reason:?}");
        self.skipped.push(SkippedRow { line, name, reason });
    }
}
