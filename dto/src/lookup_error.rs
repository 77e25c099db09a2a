use thiserror::Error;

/// A member that was asked for can't be displayed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemberNotFound {
    #[error("The server doesn't know the member [reason: {0}].")]
    Unknown(String),
    #[error("No member at position {index}, the list holds {len} members.")]
    OutOfRange { index: usize, len: usize },
    #[error("Position {index} comes from render {requested}, the current render is {current}.")]
    StaleRender {
        index: usize,
        requested: u64,
        current: u64,
    },
}
