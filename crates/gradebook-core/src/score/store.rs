/// Highest score a record may carry. Acquisition rejects anything above this.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

/// Name/score records for one analysis cycle.
///
/// Names are unique and kept in entry order. Inserting an existing name
/// overwrites the score in place without changing the record's position.
/// A store is built fresh for every cycle and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    records: Vec<ScoreRecord>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, score: u32) {
        let name = name.into();
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.score = score,
            None => self.records.push(ScoreRecord { name, score }),
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.records.iter().find(|r| r.name == name).map(|r| r.score)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in entry order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter()
    }

    pub fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().map(|r| r.score)
    }
}
