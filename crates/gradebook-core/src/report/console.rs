//! Console report formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::grade::{pass_fail, Grade, GradeHistogram, GradeSheet, PASS_THRESHOLD};
use crate::score::{stats, ScoreStore};

const NAME_WIDTH: usize = 15;
const MARK_WIDTH: usize = 10;

/// Summary statistics report: count, mean, median, max, min.
///
/// An empty store renders a single no-data notice; no statistics are computed
/// on that path.
pub fn render_summary(store: &ScoreStore) -> String {
    let mut output = String::new();
    let rule = "=".repeat(40);

    let _ = writeln!(output, "{}", rule.dimmed());
    let _ = writeln!(output, "      Statistical Analysis Summary");
    let _ = writeln!(output, "{}", rule.dimmed());

    if store.is_empty() {
        let _ = write!(output, "No student data available to analyze.");
        return output;
    }

    let _ = writeln!(output, "Total Students: {}", store.len());
    let _ = writeln!(output, "Average Score:  {:.2}", stats::mean(store));
    let _ = writeln!(output, "Median Score:   {:.2}", stats::median(store));
    let _ = writeln!(output, "Highest Score:  {}", stats::max_score(store));
    let _ = writeln!(output, "Lowest Score:   {}", stats::min_score(store));
    let _ = write!(output, "{}", rule.dimmed());

    output
}

/// Grade distribution table in fixed A, B, C, D, F order.
pub fn render_histogram(histogram: &GradeHistogram) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "--- Grade Distribution (A-F) ---");
    let _ = writeln!(output, "Grade\t| Count");
    let _ = writeln!(output, "{}", "-".repeat(15));
    for (grade, count) in histogram.iter() {
        let _ = writeln!(output, "{}\t| {}", colored_grade(grade), count);
    }
    let _ = write!(output, "{}", "-".repeat(15));

    output
}

/// Pass/fail counts at the fixed threshold, plus every failed student.
pub fn render_pass_fail(store: &ScoreStore) -> String {
    let summary = pass_fail(store);
    let mut output = String::new();

    let _ = writeln!(
        output,
        "--- Pass/Fail Analysis (Threshold >= {PASS_THRESHOLD}) ---"
    );
    let _ = writeln!(
        output,
        "{} Total Passed Students: {}",
        "PASS".green(),
        summary.pass_count()
    );
    let _ = write!(
        output,
        "{} Total Failed Students: {}",
        "FAIL".red(),
        summary.fail_count()
    );

    if !summary.failed.is_empty() {
        let _ = write!(output, "\n\nFailed Students (Name | Score):");
        for record in &summary.failed {
            let _ = write!(output, "\n\t- {} ({})", record.name, record.score);
        }
    }

    output
}

/// Full name/score/grade table in store entry order, fixed-width columns.
pub fn render_table(store: &ScoreStore, grades: &GradeSheet) -> String {
    let mut output = String::new();
    let rule = "=".repeat(45);

    let _ = writeln!(output, "{}", rule.dimmed());
    let _ = writeln!(output, "         Final Student GradeBook");
    let _ = writeln!(output, "{}", rule.dimmed());
    let _ = writeln!(
        output,
        "{:<NAME_WIDTH$} {:<MARK_WIDTH$} Grade",
        "Name", "Marks"
    );
    let _ = writeln!(output, "{}", "-".repeat(45));

    for record in store.iter() {
        // Color codes break format-width padding, so the grade goes last.
        let grade = grades
            .get(&record.name)
            .map(colored_grade)
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            output,
            "{:<NAME_WIDTH$} {:<MARK_WIDTH$} {}",
            record.name, record.score, grade
        );
    }
    let _ = write!(output, "{}", rule.dimmed());

    output
}

/// Format a grade letter with color
fn colored_grade(grade: Grade) -> String {
    let letter = grade.letter();
    match grade {
        Grade::A => letter.green().to_string(),
        Grade::B => letter.cyan().to_string(),
        Grade::C => letter.yellow().to_string(),
        Grade::D => letter.truecolor(255, 165, 0).to_string(),
        Grade::F => letter.red().to_string(),
    }
}
