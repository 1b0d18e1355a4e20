use crate::index::DisplayEntry;

pub mod add;
pub mod delete_last;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_entries: Vec<DisplayEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }
}
