//! Queen movement rule
//!
//! A queen moves like a rook or like a bishop.

use super::bishop::is_valid_bishop_move;
use super::rook::is_valid_rook_move;
use crate::board::Board;
use crate::types::*;

pub fn is_valid_queen_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_valid_rook_move(board, from, to, color) || is_valid_bishop_move(board, from, to, color)
}
