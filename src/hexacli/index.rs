//! # Display Indexes
//!
//! Entries have no identity of their own. What the user sees is a 1-based
//! position assigned at read time, so index `2` today may be a different entry
//! after a `delete-last` and an `add`.

/// An entry paired with its user-facing position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: usize,
    pub value: String,
}

impl std::fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.index, self.value)
    }
}

/// Assigns display indexes in storage order, starting at 1.
pub fn index_entries(entries: Vec<String>) -> Vec<DisplayEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, value)| DisplayEntry { index: i + 1, value })
        .collect()
}
