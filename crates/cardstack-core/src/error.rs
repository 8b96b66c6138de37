#![forbid(unsafe_code)]

//! Errors reported by the checked (`try_*`) stack operations.
//!
//! The unchecked operations treat these conditions as caller bugs and panic
//! with the same message. Benign emptiness (swiping an empty stack, undoing
//! with no history) is never an error.

use thiserror::Error;

/// A stack mutation was rejected because its arguments do not match the
/// current state. The stack is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// A data-source index that the stack does not track.
    #[error("index {index} out of range: the stack tracks {total} cards")]
    IndexOutOfRange { index: usize, total: usize },

    /// An insertion index beyond one-past-the-end of the data source.
    #[error("cannot insert index {index}: the stack tracks {total} cards (max insert index is {total})")]
    InsertIndexOutOfRange { index: usize, total: usize },

    /// A position past the last remaining card.
    #[error("position {position} out of range: {len} cards remain")]
    PositionOutOfRange { position: usize, len: usize },

    /// An insertion position beyond one-past-the-end of the remaining cards.
    #[error("cannot insert at position {position}: {len} cards remain (max insert position is {len})")]
    InsertPositionOutOfRange { position: usize, len: usize },

    /// The same data-source index was named twice in one batch.
    #[error("index {index} listed more than once")]
    DuplicateIndex { index: usize },

    /// The same stack position was named twice in one batch.
    #[error("position {position} listed more than once")]
    DuplicatePosition { position: usize },
}

/// Result alias for checked stack operations.
pub type StackResult<T = ()> = Result<T, StackError>;
