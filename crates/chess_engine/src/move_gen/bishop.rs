//! Bishop movement rule

use super::sliding::is_path_clear;
use crate::board::Board;
use crate::types::*;

/// Check whether a bishop on `from` may slide to `to`
///
/// The move must be diagonal (equal, non-zero file and rank distance) and
/// every square strictly between the two must be empty.
pub fn is_valid_bishop_move(board: &Board, from: Square, to: Square, _color: Color) -> bool {
    let dx = (to.file_index() - from.file_index()).abs();
    let dy = (to.rank_index() - from.rank_index()).abs();

    if dx != dy || dx == 0 {
        return false;
    }

    is_path_clear(board, from, to)
}
