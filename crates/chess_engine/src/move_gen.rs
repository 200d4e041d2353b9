//! Move validation
//!
//! One pure predicate per piece kind, selected through [`rule_for`]. Every
//! function here takes `&Board`: validating a move never changes the
//! position, which is what lets the resolver ask "could this piece go there?"
//! as often as it likes.
//!
//! ## Shared preconditions
//!
//! [`is_legal_move`] rejects three cases before consulting the piece rule:
//! - the origin square is empty
//! - origin and destination are the same square
//! - the destination holds a piece of the mover's color
//!
//! These moves are "legal" in the piece-rule sense only. Leaving one's own
//! king in check is caught by the caller after committing (see
//! [`crate::api::GameSession::submit_move`]).

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

use crate::board::Board;
use crate::types::*;

pub use attack::{attackers_of, checkers, is_in_check};

/// Piece-rule predicate: may a `Color` piece move from the first square to the second?
pub type LegalityRule = fn(&Board, Square, Square, Color) -> bool;

/// Rule implementing a piece kind's movement
pub fn rule_for(kind: PieceKind) -> LegalityRule {
    match kind {
        PieceKind::Pawn => pawn::is_valid_pawn_move,
        PieceKind::Rook => rook::is_valid_rook_move,
        PieceKind::Knight => knight::is_valid_knight_move,
        PieceKind::Bishop => bishop::is_valid_bishop_move,
        PieceKind::Queen => queen::is_valid_queen_move,
        PieceKind::King => king::is_valid_king_move,
    }
}

/// Check if the piece on `from` may move to `to`
///
/// Returns `false` for an empty origin instead of failing.
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't capture your own pieces
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    rule_for(piece.kind)(board, from, to, piece.color)
}

/// Every square the piece on `from` may move to under its piece rule
///
/// Scans all 64 destinations, so sliding pieces get their full rays. The
/// result is not filtered for self-check.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal_move(board, from, to))
        .collect()
}
