//! Line geometry shared by the sliding pieces
//!
//! Rooks, bishops and queens move along ranks, files and diagonals and are
//! stopped by the first occupied square. The same "squares strictly between"
//! walk is used by the resolver to find where a check can be blocked.

use crate::board::Board;
use crate::types::Square;

/// Unit step from `from` toward `to` if they share a rank, file or diagonal
pub fn line_direction(from: Square, to: Square) -> Option<(i8, i8)> {
    let dx = to.file_index() - from.file_index();
    let dy = to.rank_index() - from.rank_index();

    if (dx, dy) == (0, 0) {
        return None;
    }
    if dx == 0 || dy == 0 || dx.abs() == dy.abs() {
        Some((dx.signum(), dy.signum()))
    } else {
        None
    }
}

/// Squares strictly between `from` and `to`, walking from `from`
///
/// Empty when the squares are adjacent or not on a common line.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let Some((dx, dy)) = line_direction(from, to) else {
        return Vec::new();
    };

    let mut squares = Vec::new();
    let mut current = from.offset(dx, dy);
    while let Some(square) = current {
        if square == to {
            break;
        }
        squares.push(square);
        current = square.offset(dx, dy);
    }
    squares
}

/// True if every square strictly between `from` and `to` is empty
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to)
        .into_iter()
        .all(|square| board.is_empty(square))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn test_squares_between_file() {
        assert_eq!(squares_between(sq("e1"), sq("e4")), vec![sq("e2"), sq("e3")]);
    }

    #[test]
    fn test_squares_between_diagonal_backwards() {
        assert_eq!(squares_between(sq("h8"), sq("e5")), vec![sq("g7"), sq("f6")]);
    }

    #[test]
    fn test_squares_between_adjacent_or_unaligned() {
        assert!(squares_between(sq("e1"), sq("e2")).is_empty());
        assert!(squares_between(sq("b1"), sq("c3")).is_empty());
        assert!(squares_between(sq("d4"), sq("d4")).is_empty());
    }
}
