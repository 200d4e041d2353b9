//! Error types for chess engine
//!
//! Ordinary rule outcomes (an illegal move, no legal move, checkmate) are
//! plain values, never errors. The variants here cover broken invariants and
//! API misuse that the caller has to react to.

use crate::types::Color;
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square text outside `a1..h8`
    #[error("Invalid square: {input:?} (expected a file a-h followed by a rank 1-8)")]
    InvalidSquare { input: String },

    /// Move request text that is not two squares separated by whitespace
    #[error("Invalid move request: {input:?} (expected e.g. \"e2 e4\")")]
    InvalidMoveRequest { input: String },

    /// The board has no king for this color; the position cannot be judged
    #[error("No {color} king on the board")]
    KingNotFound { color: Color },

    /// Undo requested with nothing recorded
    #[error("No move recorded to undo")]
    NoUndoHistory,

    /// Recorded move no longer matches the board; nothing was restored
    #[error("Undo record does not match the board: {reason}")]
    MalformedUndoRecord { reason: String },

    /// Legal-move search asked for a side that is in check
    #[error("{color} is in check; stalemate search requires a side that is not in check")]
    InCheckPrecondition { color: Color },

    /// Operation that needs a game in progress
    #[error("The game is already over")]
    GameOver,
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
