//! Integration tests for gradebook-core
//!
//! These tests run a whole analysis cycle the way the CLI does: build a
//! store, grade it, and render every report.

use gradebook_core::score::stats;
use gradebook_core::{grade_all, pass_fail, report, Grade, ScoreStore};

fn class_of_four() -> ScoreStore {
    let mut store = ScoreStore::new();
    store.insert("Alice", 95);
    store.insert("Bob", 82);
    store.insert("Carol", 58);
    store.insert("Dan", 40);
    store
}

mod statistics_tests {
    use super::*;

    #[test]
    fn test_class_of_four_statistics() {
        let store = class_of_four();

        assert!((stats::mean(&store) - 68.75).abs() < 1e-9);
        assert_eq!(stats::median(&store), 70.0);
        assert_eq!(stats::max_score(&store), 95);
        assert_eq!(stats::min_score(&store), 40);
    }

    #[test]
    fn test_mean_times_count_equals_sum() {
        for scores in [vec![77], vec![0, 100], vec![95, 82, 58, 40], vec![33, 33, 34]] {
            let mut store = ScoreStore::new();
            for (i, &score) in scores.iter().enumerate() {
                store.insert(format!("s{i}"), score);
            }
            let sum: u32 = scores.iter().sum();
            let product = stats::mean(&store) * store.len() as f64;
            assert!((product - f64::from(sum)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_store_statistics_are_zero() {
        let store = ScoreStore::new();
        assert_eq!(stats::mean(&store), 0.0);
        assert_eq!(stats::median(&store), 0.0);
        assert_eq!(stats::max_score(&store), 0);
        assert_eq!(stats::min_score(&store), 0);
    }
}

mod grading_tests {
    use super::*;

    #[test]
    fn test_class_of_four_grades() {
        let store = class_of_four();
        let (sheet, histogram) = grade_all(&store);

        assert_eq!(sheet.get("Alice"), Some(Grade::A));
        assert_eq!(sheet.get("Bob"), Some(Grade::B));
        assert_eq!(sheet.get("Carol"), Some(Grade::F));
        assert_eq!(sheet.get("Dan"), Some(Grade::F));

        assert_eq!(histogram.count(Grade::A), 1);
        assert_eq!(histogram.count(Grade::B), 1);
        assert_eq!(histogram.count(Grade::C), 0);
        assert_eq!(histogram.count(Grade::D), 0);
        assert_eq!(histogram.count(Grade::F), 2);
        assert_eq!(histogram.total() as usize, store.len());
    }

    #[test]
    fn test_class_of_four_pass_fail() {
        let summary = pass_fail(&class_of_four());

        // Dan sits exactly on the threshold and passes.
        assert_eq!(summary.pass_count(), 3);
        assert_eq!(summary.fail_count(), 1);
        assert_eq!(summary.failed[0].name, "Carol");
        assert_eq!(summary.failed[0].score, 58);
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn test_full_report_cycle() {
        let store = class_of_four();
        let (sheet, histogram) = grade_all(&store);

        let summary = report::render_summary(&store);
        assert!(summary.contains("Total Students: 4"));
        assert!(summary.contains("Average Score:  68.75"));

        let histogram_report = report::render_histogram(&histogram);
        assert!(histogram_report.contains("Grade Distribution"));

        let pass_fail_report = report::render_pass_fail(&store);
        assert!(pass_fail_report.contains("Total Passed Students: 3"));

        let table = report::render_table(&store, &sheet);
        assert!(table.contains("Alice"));
        assert!(table.contains("95"));
    }

    #[test]
    fn test_empty_store_renders_no_data_notice() {
        let report = report::render_summary(&ScoreStore::new());
        assert!(report.contains("No student data available to analyze."));
    }
}
