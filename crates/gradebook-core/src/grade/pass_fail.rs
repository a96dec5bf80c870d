use crate::score::{ScoreRecord, ScoreStore};

/// Score at or above which a record counts as a pass.
pub const PASS_THRESHOLD: u32 = 40;

/// Disjoint pass/fail partition of a store. Every record lands in exactly one
/// side; the threshold itself is a pass.
#[derive(Debug, Clone, Default)]
pub struct PassFailSummary {
    pub passed: Vec<ScoreRecord>,
    pub failed: Vec<ScoreRecord>,
}

impl PassFailSummary {
    pub fn pass_count(&self) -> usize {
        self.passed.len()
    }

    pub fn fail_count(&self) -> usize {
        self.failed.len()
    }
}

pub fn pass_fail(store: &ScoreStore) -> PassFailSummary {
    let mut summary = PassFailSummary::default();
    for record in store.iter() {
        if record.score >= PASS_THRESHOLD {
            summary.passed.push(record.clone());
        } else {
            summary.failed.push(record.clone());
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let mut store = ScoreStore::new();
        store.insert("Dan", 40);
        store.insert("Carol", 39);

        let summary = pass_fail(&store);
        assert_eq!(summary.pass_count(), 1);
        assert_eq!(summary.fail_count(), 1);
        assert_eq!(summary.passed[0].name, "Dan");
        assert_eq!(summary.failed[0].name, "Carol");
    }

    #[test]
    fn test_partition_covers_store() {
        let mut store = ScoreStore::new();
        for (i, score) in [0, 39, 40, 41, 100].into_iter().enumerate() {
            store.insert(format!("student{i}"), score);
        }

        let summary = pass_fail(&store);
        assert_eq!(summary.pass_count() + summary.fail_count(), store.len());
        assert!(summary.passed.iter().all(|r| r.score >= PASS_THRESHOLD));
        assert!(summary.failed.iter().all(|r| r.score < PASS_THRESHOLD));
    }

    #[test]
    fn test_empty_store() {
        let summary = pass_fail(&ScoreStore::new());
        assert_eq!(summary.pass_count(), 0);
        assert_eq!(summary.fail_count(), 0);
    }
}
