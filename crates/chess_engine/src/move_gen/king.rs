//! King movement rule
//!
//! Kings move one square in any direction. Whether the destination is
//! attacked is not a question for this rule; the resolver and the game
//! session reject moves that leave the king in check. Castling is not
//! supported.

use crate::board::Board;
use crate::types::*;

/// The eight neighbouring offsets as (file, rank) deltas
pub const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Check whether a king on `from` may step to `to`
pub fn is_valid_king_move(_board: &Board, from: Square, to: Square, _color: Color) -> bool {
    let dx = (to.file_index() - from.file_index()).abs();
    let dy = (to.rank_index() - from.rank_index()).abs();
    dx.max(dy) == 1
}
