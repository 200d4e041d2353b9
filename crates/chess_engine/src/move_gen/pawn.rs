//! Pawn movement rule
//!
//! ## Pawn Movement Rules
//!
//! - **Forward step**: one square toward the opponent, destination empty
//! - **Double step**: only from the color's starting rank (2 for White,
//!   7 for Black), with both the skipped and destination squares empty
//! - **Captures**: one square diagonally forward, destination holds an
//!   opposing piece
//!
//! "Forward" is fixed per color ([`Color::pawn_direction`]); it never depends
//! on how the board is displayed. There is no en passant or promotion.

use crate::board::Board;
use crate::types::*;

/// Check whether a pawn of `color` on `from` may move to `to`
pub fn is_valid_pawn_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let direction = color.pawn_direction();
    let dx = to.file_index() - from.file_index();
    let dy = to.rank_index() - from.rank_index();

    // Forward move
    if dx == 0 && dy == direction {
        return board.is_empty(to);
    }

    // Double move from starting position
    if dx == 0 && dy == 2 * direction && from.rank_number() == color.pawn_start_rank() {
        return match from.offset(0, direction) {
            Some(skipped) => board.is_empty(skipped) && board.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally
    if dx.abs() == 1 && dy == direction {
        return board.piece_at(to).is_some_and(|target| target.color != color);
    }

    false
}
