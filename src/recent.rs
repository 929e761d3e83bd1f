// =============================================================================
// Recent Searches — bounded most-recent-first ticker list
// =============================================================================
//
// Backs the dashboard's "recent searches" chips. Capacity-bounded, ordered
// newest first, de-duplicated by ticker (recording an existing ticker moves
// it to the front). In-memory only; the list resets on restart.

/// Bounded most-recent-first list of searched tickers.
#[derive(Debug, Clone)]
pub struct RecentSearches {
    capacity: usize,
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record a search, moving an existing entry to the front and evicting
    /// the oldest entry once the list is full.
    pub fn record(&mut self, ticker: &str) {
        self.entries.retain(|t| t != ticker);
        self.entries.insert(0, ticker.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Remove a ticker from the list. Returns whether it was present.
    pub fn remove(&mut self, ticker: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t != ticker);
        self.entries.len() != before
    }

    /// Snapshot of the list, newest first.
    pub fn list(&self) -> Vec<String> {
        self.entries.clone()
    }
}
