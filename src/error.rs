use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteError {
    #[error("History is empty. Cannot undo a command that hasn't been executed.")]
    EmptyHistory,
}
