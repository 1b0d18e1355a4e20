//! # Storage Layer
//!
//! This module defines the repository port for hexacli. The [`EntryStore`] trait
//! is the only thing the command and API layers know about persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a newline-delimited text file
//!   - One entry per line, insertion order is file order
//!   - The file (and its parent directories) are created on first access
//!   - All operations are serialized by an in-process mutex
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same blank-line and last-entry rules as the file store
//!
//! ## Storage Format
//!
//! ```text
//! hello
//! world
//! ```
//!
//! Every successful write leaves exactly one trailing newline. The only
//! exception is a delete over a file holding nothing but blank lines, which
//! truncates it to zero bytes.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for entry storage.
///
/// Methods take `&self`: implementations are expected to serialize access
/// internally so a single store can be shared between callers.
pub trait EntryStore {
    /// Append one entry. Embedded newlines are stored as spaces.
    fn add(&self, value: &str) -> Result<()>;

    /// All entries in insertion order.
    fn list(&self) -> Result<Vec<String>>;

    /// Remove the last non-blank entry, dropping any blank lines after it.
    ///
    /// Fails with [`crate::error::HexaError::NothingToDelete`] when the store has no lines.
    fn delete_last(&self) -> Result<()>;
}
