//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every hexacli operation, whatever the UI.
//!
//! It dispatches to `commands::*::run` and returns `Result<CmdResult>`. It does
//! no I/O of its own: nothing here writes to stdout or stderr, and nothing
//! formats output.
//!
//! ## Generic Over EntryStore
//!
//! `HexaApi<S: EntryStore>` is generic over the storage backend:
//! - Production: `HexaApi<FileStore>`
//! - Testing: `HexaApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::EntryStore;

/// The main API facade for hexacli operations.
pub struct HexaApi<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> HexaApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_value(&self, value: &str) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, value)
    }

    pub fn list_values(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn delete_last(&self) -> Result<commands::CmdResult> {
        commands::delete_last::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult};
