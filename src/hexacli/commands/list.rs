use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_entries;
use crate::store::EntryStore;

pub fn run<S: EntryStore>(store: &S) -> Result<CmdResult> {
    let entries = store.list()?;
    Ok(CmdResult::default().with_listed_entries(index_entries(entries)))
}
