use strum::IntoEnumIterator;

use crate::score::ScoreStore;

use super::Grade;

/// Per-student letter grades, in store entry order. Derived from a store and
/// not mutable on its own.
#[derive(Debug, Clone, Default)]
pub struct GradeSheet {
    entries: Vec<(String, Grade)>,
}

impl GradeSheet {
    pub fn get(&self, name: &str) -> Option<Grade> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, grade)| grade)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Grade)> {
        self.entries.iter().map(|(n, g)| (n.as_str(), *g))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Record count per letter grade. Every bucket is always present, so empty
/// buckets show up as zero in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeHistogram {
    counts: [u32; 5],
}

impl GradeHistogram {
    pub fn record(&mut self, grade: Grade) {
        self.counts[grade as usize] += 1;
    }

    pub fn count(&self, grade: Grade) -> u32 {
        self.counts[grade as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Buckets in fixed A, B, C, D, F order.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, u32)> + '_ {
        Grade::iter().map(|grade| (grade, self.count(grade)))
    }
}

/// Grade every record in the store, producing the per-student sheet and the
/// bucket histogram in one pass.
pub fn grade_all(store: &ScoreStore) -> (GradeSheet, GradeHistogram) {
    let mut sheet = GradeSheet::default();
    let mut histogram = GradeHistogram::default();

    for record in store.iter() {
        let grade = Grade::from_score(record.score);
        sheet.entries.push((record.name.clone(), grade));
        histogram.record(grade);
    }

    (sheet, histogram)
}
