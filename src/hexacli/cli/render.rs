use colored::Colorize;
use hexacli::api::CmdMessage;
use hexacli::index::DisplayEntry;
use std::fmt::Display;

pub(super) fn render_entries(entries: &[DisplayEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry))
        .collect()
}

pub(super) fn print_entries(entries: &[DisplayEntry]) {
    print!("{}", render_entries(entries));
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", message.content.green());
    }
}

/// Prints `error: <err>` to stderr, uncolored.
pub(super) fn print_error(err: &impl Display) {
    eprintln!("error: {}", err);
}
