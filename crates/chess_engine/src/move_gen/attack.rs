//! Attack detection and check
//!
//! A king square is just another destination: a side is in check when any
//! opposing piece's ordinary move rule allows it to move onto the king.

use super::is_legal_move;
use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::types::*;

/// Squares of every `by_color` piece that may move onto `target`
///
/// Pawns only count when `target` holds an opposing piece (pawns attack
/// diagonally, they do not capture straight ahead). For king squares that is
/// always the case.
pub fn attackers_of(board: &Board, target: Square, by_color: Color) -> Vec<Square> {
    board
        .pieces(by_color)
        .filter(|&(from, _)| is_legal_move(board, from, target))
        .map(|(from, _)| from)
        .collect()
}

/// Opposing pieces giving check to `color`'s king
///
/// # Errors
///
/// [`crate::ChessEngineError::KingNotFound`] if `color` has no king.
pub fn checkers(board: &Board, color: Color) -> ChessEngineResult<Vec<Square>> {
    let king = board.king_square(color)?;
    Ok(attackers_of(board, king, color.opponent()))
}

/// Check whether `color`'s king is attacked
///
/// # Errors
///
/// [`crate::ChessEngineError::KingNotFound`] if `color` has no king. A
/// missing king is never reported as "not in check".
pub fn is_in_check(board: &Board, color: Color) -> ChessEngineResult<bool> {
    let king = board.king_square(color)?;
    let attacker = color.opponent();
    Ok(board
        .pieces(attacker)
        .any(|(from, _)| is_legal_move(board, from, king)))
}
