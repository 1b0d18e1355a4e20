use super::EntryStore;
use crate::error::{HexaError, Result};
use crate::model::{last_entry_index, to_entry_line};
use std::sync::{Mutex, MutexGuard};

/// Keeps lines in a vector, following the same rules as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    lines: Mutex<Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw lines, blank ones included.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    fn lines(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EntryStore for InMemoryStore {
    fn add(&self, value: &str) -> Result<()> {
        self.lines().push(to_entry_line(value));
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.lines().clone())
    }

    fn delete_last(&self) -> Result<()> {
        let mut lines = self.lines();
        if lines.is_empty() {
            return Err(HexaError::NothingToDelete);
        }
        let keep = last_entry_index(lines.as_slice()).unwrap_or(0);
        lines.truncate(keep);
        Ok(())
    }
}
