//! Decode errors raised while turning wire descriptors into game values.

use thiserror::Error;

/// A malformed wire payload.
///
/// These are fatal for the message that carried them: the caller should drop
/// the message instead of trying to repair it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A board cell or dead-list entry that is not a known piece descriptor.
    #[error("unknown piece descriptor: {0:?}")]
    UnknownPiece(String),

    /// A board grid that is not 4 rows of 8 cells.
    #[error("board must be {rows}x{cols}; row {row} has {len} cells")]
    BoardShape {
        rows: usize,
        cols: usize,
        row: usize,
        len: usize,
    },

    /// A board grid with the wrong number of rows.
    #[error("board must have {expected} rows; got {got}")]
    BoardRows { expected: usize, got: usize },

    /// Location text that isn't a column letter followed by a row number.
    #[error("invalid location: {0:?}")]
    InvalidLocation(String),
}

/// Result type alias for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
