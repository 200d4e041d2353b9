//! Knight movement rule
//!
//! Knights move in an L-shape: two squares along one axis and one along the
//! other. They jump, so nothing in between matters.

use crate::board::Board;
use crate::types::*;

/// Jump offsets as (file, rank) deltas
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Check whether a knight on `from` may jump to `to`
pub fn is_valid_knight_move(_board: &Board, from: Square, to: Square, _color: Color) -> bool {
    let jump = (
        to.file_index() - from.file_index(),
        to.rank_index() - from.rank_index(),
    );
    KNIGHT_JUMPS.contains(&jump)
}
