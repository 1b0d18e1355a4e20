//! # CLI Behavior
//!
//! This is **one possible UI client** for hexacli, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the library documentation.
//!
//! ## Commands
//!
//! - `hexacli add <value...>`: words are joined with single spaces into one entry; prints `OK`.
//! - `hexacli list`: prints `<index>: <entry>` per line, nothing for an empty store.
//! - `hexacli delete-last`: removes the last non-blank entry; prints `Deleted last entry`.
//!
//! Extra arguments after `list` or `delete-last` are ignored. Any other command,
//! `help` included, is an unknown command.
//!
//! Flags go before the command. `--file <PATH>` picks the data file and wins over
//! the `HEXACLI_FILE` environment variable; with neither, `./data.txt` is used.
//!
//! ## Module Structure
//!
//! - `commands`: Parsing, context setup, dispatch, exit codes
//! - `render`: Output formatting
//! - `setup`: Argument definitions via clap, usage banner

mod commands;
mod render;
pub mod setup;

pub use commands::run;
