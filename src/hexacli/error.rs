use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexaError {
    #[error("file path is empty")]
    EmptyPath,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("nothing to delete: file is empty")]
    NothingToDelete,

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, HexaError>;
