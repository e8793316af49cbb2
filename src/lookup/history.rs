use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// What a recall step asks the query field to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    Entry(String),
    /// Stepped past the newest entry; the field should be emptied.
    Cleared,
    /// Nothing to move to; leave the field alone.
    Unchanged,
}

/// Bounded list of past search terms plus a recall cursor.
///
/// The cursor indexes into `entries` (oldest first) and is `None` when no
/// recall is in progress.
#[derive(Debug, Clone)]
pub struct QueryHistory {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: Option<usize>,
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl QueryHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: None,
        }
    }

    /// Records a search. Repeating the last term is not appended again.
    /// The cursor always resets.
    pub fn record(&mut self, term: &str) {
        self.cursor = None;
        if self.entries.back().map(String::as_str) == Some(term) {
            return;
        }
        self.entries.push_back(term.to_string());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn recall_older(&mut self) -> Recall {
        let next = match self.cursor {
            None if self.entries.is_empty() => return Recall::Unchanged,
            None => self.entries.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(next);
        Recall::Entry(self.entries[next].clone())
    }

    pub fn recall_newer(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Unchanged,
            Some(idx) if idx + 1 < self.entries.len() => {
                self.cursor = Some(idx + 1);
                Recall::Entry(self.entries[idx + 1].clone())
            }
            Some(_) => {
                self.cursor = None;
                Recall::Cleared
            }
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(terms: &[&str]) -> QueryHistory {
        let mut history = QueryHistory::default();
        for term in terms {
            history.record(term);
        }
        history
    }

    fn entries(history: &QueryHistory) -> Vec<&str> {
        history.iter().collect()
    }

    #[test]
    fn suppresses_only_immediate_duplicates() {
        assert_eq!(entries(&history_of(&["a", "a"])), vec!["a"]);
        assert_eq!(entries(&history_of(&["a", "b", "a"])), vec!["a", "b", "a"]);
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut history = QueryHistory::default();
        for i in 0..101 {
            history.record(&format!("w{}", i));
        }
        assert_eq!(history.len(), 100);
        assert_eq!(history.iter().next(), Some("w1"));
        assert_eq!(history.iter().next_back(), Some("w100"));
    }

    #[test]
    fn small_capacity_is_respected() {
        let mut history = QueryHistory::with_capacity(2);
        history.record("x");
        history.record("y");
        history.record("z");
        assert_eq!(entries(&history), vec!["y", "z"]);
    }

    #[test]
    fn recall_walks_back_and_forward() {
        let mut history = history_of(&["a", "b", "c"]);
        assert_eq!(history.recall_older(), Recall::Entry("c".into()));
        assert_eq!(history.recall_older(), Recall::Entry("b".into()));
        assert_eq!(history.recall_newer(), Recall::Entry("c".into()));
        assert_eq!(history.recall_newer(), Recall::Cleared);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn recall_stops_at_oldest() {
        let mut history = history_of(&["a", "b"]);
        history.recall_older();
        history.recall_older();
        assert_eq!(history.recall_older(), Recall::Entry("a".into()));
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn recall_on_empty_or_idle_history_does_nothing() {
        let mut empty = QueryHistory::default();
        assert_eq!(empty.recall_older(), Recall::Unchanged);
        assert_eq!(empty.recall_newer(), Recall::Unchanged);

        let mut idle = history_of(&["a"]);
        assert_eq!(idle.recall_newer(), Recall::Unchanged);
    }

    #[test]
    fn recording_resets_cursor_even_for_duplicates() {
        let mut history = history_of(&["a", "b"]);
        history.recall_older();
        history.record("b");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.len(), 2);
    }
}
