//! Error types for parsing chess notation.

use std::fmt;

/// Error returned when a FEN string cannot be parsed into a [`crate::Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has the wrong number of whitespace-separated fields.
    WrongFieldCount { found: usize },
    /// Invalid piece character in the piece-placement field.
    InvalidPiece { char: char },
    /// A rank in the piece-placement field describes more or fewer than 8 files.
    InvalidRankWidth { rank: usize, files: usize },
    /// The piece-placement field has more or fewer than 8 ranks.
    InvalidRankCount { found: usize },
    /// Side-to-move field is not `w` or `b`.
    InvalidSideToMove { found: String },
    /// Castling field contains a character outside `KQkq-`.
    InvalidCastling { char: char },
    /// En-passant target is not `-` or a valid algebraic square.
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move counter is not a valid integer.
    InvalidCounter { field: &'static str, found: String },
    /// A side does not have exactly one king on the board.
    InvalidKingCount { color: &'static str, found: u32 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankWidth { rank, files } => {
                write!(f, "rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "piece placement has {found} ranks, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en-passant target '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "invalid {field} '{found}'")
            }
            FenError::InvalidKingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error describing why a 4- or 5-character move string could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string is not 4 or 5 characters long.
    InvalidLength { len: usize },
    /// A square in the move string is not valid algebraic notation.
    InvalidSquare { notation: String },
    /// The trailing promotion character is not one of `r`, `n`, `b`, `q`.
    InvalidPromotion { char: char },
    /// The move does not appear in the current position's legal move list.
    NotLegal { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move notation must be 4 or 5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square in move notation '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "invalid promotion piece '{char}'")
            }
            MoveParseError::NotLegal { notation } => {
                write!(f, "'{notation}' is not a legal move in this position")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
