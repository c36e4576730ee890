use std::collections::HashMap;

/// Store key under which the best score is persisted.
pub const BEST_SCORE_KEY: &str = "best_score";

/// Key-value persistence for scores.
///
/// The adapter only ever reads and writes [`BEST_SCORE_KEY`], but the trait is
/// keyed so a platform store (preferences file, browser storage, ...) can be
/// plugged in unchanged. A missing key reads as `None`.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<usize>;
    fn set(&mut self, key: &str, value: usize);
}

/// In-memory [`ScoreStore`] for tests and for hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    values: HashMap<String, usize>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Option<usize> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: usize) {
        self.values.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let store = MemoryScoreStore::new();
        assert_eq!(store.get(BEST_SCORE_KEY), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryScoreStore::new();
        store.set(BEST_SCORE_KEY, 300);
        assert_eq!(store.get(BEST_SCORE_KEY), Some(300));
        store.set(BEST_SCORE_KEY, 500);
        assert_eq!(store.get(BEST_SCORE_KEY), Some(500));
    }
}
