use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EntryStore;

pub fn run<S: EntryStore>(store: &S) -> Result<CmdResult> {
    store.delete_last()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Deleted last entry"));
    Ok(result)
}
