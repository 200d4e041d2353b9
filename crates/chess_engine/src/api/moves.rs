//! Move requests and rejection reasons

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use std::fmt;
use std::str::FromStr;

/// A move as submitted by a player: origin and destination squares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
}

impl MoveRequest {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parse `"e2 e4"` (case-insensitive, any whitespace between the squares)
    pub fn parse(input: &str) -> ChessEngineResult<Self> {
        let invalid = || ChessEngineError::InvalidMoveRequest {
            input: input.to_string(),
        };
        let mut parts = input.split_whitespace();
        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        Ok(Self {
            from: Square::parse(from).map_err(|_| invalid())?,
            to: Square::parse(to).map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

impl FromStr for MoveRequest {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveRequest::parse(s)
    }
}

/// Why a submitted move was not played
///
/// The `Display` text is shown to the player who made the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    GameOver,
    NotYourTurn { to_move: Color },
    EmptySquare { square: Square },
    NotYourPiece { square: Square },
    IllegalPieceMove { kind: PieceKind },
    LeavesKingInCheck,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::GameOver => f.write_str("Invalid Move: the game is over."),
            Rejection::NotYourTurn { to_move } => {
                write!(f, "Invalid Move: it is {to_move}'s turn.")
            }
            Rejection::EmptySquare { square } => {
                write!(f, "Invalid Move: there is no piece on {square}.")
            }
            Rejection::NotYourPiece { square } => {
                write!(f, "Invalid Move: the piece on {square} is not yours.")
            }
            Rejection::IllegalPieceMove { kind } => {
                write!(f, "Invalid Move: cannot move {kind} there.")
            }
            Rejection::LeavesKingInCheck => {
                f.write_str("Invalid Move: that move would leave your king in check.")
            }
        }
    }
}
