use clap::{Parser, Subcommand};

/// Banner printed to stderr when no command is given.
pub fn usage() -> &'static str {
    "Usage:
  hexacli [--file ./data.txt] add <value>
  hexacli [--file ./data.txt] list
  hexacli [--file ./data.txt] delete-last"
}

#[derive(Parser, Debug)]
#[command(name = "hexacli", bin_name = "hexacli", version)]
#[command(about = "Append, list, and drop lines in a plain text file", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to the data file (overrides HEXACLI_FILE, defaults to ./data.txt)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Verbose output (debug diagnostics on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Append one entry; all words are joined with single spaces
    Add {
        /// Words of the entry
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "VALUE")]
        value: Vec<String>,
    },

    /// List entries as "<index>: <entry>"
    List {
        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },

    /// Remove the last non-blank entry
    DeleteLast {
        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },

    /// Anything else is reported as an unknown command
    #[command(external_subcommand)]
    Other(Vec<String>),
}
