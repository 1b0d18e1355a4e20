//! Entries are plain single-line strings. These helpers hold the rules every
//! store shares, so the file and in-memory adapters agree on what "one entry"
//! and "the last entry" mean.

/// Flattens a value into a single stored line.
pub fn to_entry_line(value: &str) -> String {
    value.replace('\n', " ")
}

/// A line made only of whitespace is noise, not an entry.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Position of the last line that carries content, if any.
///
/// Trailing blank lines are skipped, so `["a", "b", "", "  "]` yields `Some(1)`.
pub fn last_entry_index<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines.iter().rposition(|line| !is_blank(line.as_ref()))
}

/// Serializes lines back into file content: newline separated, with a single
/// trailing newline unless there is nothing to write.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    content
}
