//! Summary statistics over a score store.
//!
//! All functions are total over empty input and return a defined zero value
//! rather than an error. Callers that want to distinguish "no data" check
//! `ScoreStore::is_empty` themselves.

use super::ScoreStore;

/// Mean score, or 0.0 for an empty store.
pub fn mean(store: &ScoreStore) -> f64 {
    if store.is_empty() {
        return 0.0;
    }
    let total: u32 = store.scores().sum();
    f64::from(total) / store.len() as f64
}

/// Median score, or 0.0 for an empty store.
///
/// Odd count: the middle of the sorted scores. Even count: the mean of the
/// two central values.
pub fn median(store: &ScoreStore) -> f64 {
    if store.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<u32> = store.scores().collect();
    sorted.sort_unstable();

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        f64::from(sorted[middle])
    } else {
        f64::from(sorted[middle - 1] + sorted[middle]) / 2.0
    }
}

/// Highest score, or 0 for an empty store.
pub fn max_score(store: &ScoreStore) -> u32 {
    store.scores().max().unwrap_or(0)
}

/// Lowest score, or 0 for an empty store.
pub fn min_score(store: &ScoreStore) -> u32 {
    store.scores().min().unwrap_or(0)
}
