//! Rook movement rule

use super::sliding::is_path_clear;
use crate::board::Board;
use crate::types::*;

/// Check whether a rook on `from` may slide to `to`
///
/// The move must stay on one file or one rank and every square strictly
/// between the two must be empty.
pub fn is_valid_rook_move(board: &Board, from: Square, to: Square, _color: Color) -> bool {
    let same_file = from.file_index() == to.file_index();
    let same_rank = from.rank_index() == to.rank_index();

    // Must move horizontally or vertically
    if same_file == same_rank {
        return false;
    }

    is_path_clear(board, from, to)
}
