use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EntryStore;
use tracing::debug;

pub fn run<S: EntryStore>(store: &S, value: &str) -> Result<CmdResult> {
    // An empty value is accepted but never reaches the store.
    if value.is_empty() {
        debug!("empty value, nothing stored");
    } else {
        store.add(value)?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("OK"));
    Ok(result)
}
