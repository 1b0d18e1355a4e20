//! Dispatch: parse, build the context, call the API, render, pick an exit code.
//!
//! Exit codes:
//! - `0`: the command succeeded
//! - `1`: the command ran and failed (I/O, nothing to delete, unknown command)
//! - `2`: the invocation itself was unusable (no command, bad flags, missing value)

use super::render::{print_entries, print_error, print_messages};
use super::setup::{usage, Cli, Commands};
use clap::Parser;
use hexacli::api::HexaApi;
use hexacli::config::AppConfig;
use hexacli::error::{HexaError, Result};
use hexacli::logging;
use hexacli::store::fs::FileStore;
use hexacli::store::EntryStore;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

pub fn run() -> u8 {
    run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land here too; clap knows which stream and code they get.
            let _ = e.print();
            if e.use_stderr() {
                eprintln!("{}", usage());
            }
            return e.exit_code() as u8;
        }
    };

    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        eprintln!("{}", usage());
        return EXIT_USAGE;
    };

    let config = AppConfig::resolve(cli.file.map(PathBuf::from));
    debug!(data_file = %config.data_file.display(), "resolved configuration");

    let api = HexaApi::new(FileStore::new(config.data_file));
    dispatch(&api, command)
}

pub(super) fn dispatch<S: EntryStore>(api: &HexaApi<S>, command: Commands) -> u8 {
    let outcome = match command {
        Commands::Add { value } => {
            if value.is_empty() {
                eprintln!("add requires a value");
                return EXIT_USAGE;
            }
            handle_add(api, &value.join(" "))
        }
        Commands::List { .. } => handle_list(api),
        Commands::DeleteLast { .. } => handle_delete_last(api),
        Commands::Other(args) => Err(HexaError::UnknownCommand(
            args.into_iter().next().unwrap_or_default(),
        )),
    };

    match outcome {
        Ok(()) => EXIT_OK,
        Err(e) => {
            print_error(&e);
            EXIT_FAILURE
        }
    }
}

fn handle_add<S: EntryStore>(api: &HexaApi<S>, value: &str) -> Result<()> {
    let result = api.add_value(value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list<S: EntryStore>(api: &HexaApi<S>) -> Result<()> {
    let result = api.list_values()?;
    print_entries(&result.listed_entries);
    Ok(())
}

fn handle_delete_last<S: EntryStore>(api: &HexaApi<S>) -> Result<()> {
    let result = api.delete_last()?;
    print_messages(&result.messages);
    Ok(())
}
