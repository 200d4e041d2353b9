//! Board representation
//!
//! The board is a padded 10x10 grid of `Option<Piece>`. Only the interior
//! cells (rows and columns 1-8) can hold pieces; the border exists so the
//! rendered form can put axis labels in the same coordinate system. See
//! [`Square::to_padded`] for the mapping.
//!
//! `Board` is `Copy`: at 100 small cells a full copy is cheap, and the check
//! resolver relies on that to try moves on a snapshot instead of mutating the
//! live position.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// Width of the padded grid, label rows/columns included
pub const BOARD_WIDTH: usize = 10;

/// Cell shown for an empty square
pub const EMPTY_TILE: char = '·';

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 chess position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_WIDTH]; BOARD_WIDTH],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH]; BOARD_WIDTH],
        }
    }

    /// The standard opening position
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        board.create_new_board();
        board
    }

    /// Build a board from explicit placements (test fixtures, puzzles)
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            board.set_piece(square, Some(piece));
        }
        board
    }

    /// Reset to the standard opening position
    pub fn create_new_board(&mut self) {
        *self = Self::empty();
        for color in Color::ALL {
            let back = color.back_rank() as i8 - 1;
            let pawns = color.pawn_start_rank() as i8 - 1;
            for (file, kind) in BACK_ROW.iter().enumerate() {
                let file = file as i8;
                if let Some(square) = Square::from_indices(file, back) {
                    self.set_piece(square, Some(Piece::new(*kind, color)));
                }
                if let Some(square) = Square::from_indices(file, pawns) {
                    self.set_piece(square, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
    }

    /// Piece on a square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.to_padded();
        self.grid[row][col]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place (or clear, with `None`) a square, returning what was there
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let (row, col) = square.to_padded();
        std::mem::replace(&mut self.grid[row][col], piece)
    }

    /// Every occupied square
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Every square holding a piece of `color`
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Locate `color`'s king
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::KingNotFound`] if the king is missing. That cannot
    /// happen in normal play and callers should treat it as fatal.
    pub fn king_square(&self, color: Color) -> ChessEngineResult<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.occupied()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
            .ok_or(ChessEngineError::KingNotFound { color })
    }

    /// Plain-text board with letter pieces (uppercase White, lowercase Black)
    pub fn to_display_string(&self, perspective: Perspective) -> String {
        self.render_with(perspective, Piece::letter)
    }

    /// Render the board with axis labels, substituting pieces through `glyph`
    ///
    /// Cells are separated by single spaces and every row ends with `\n`.
    /// From White's side the first row is the file labels, then rank 8 down to
    /// rank 1, files a to h. From Black's side both axes are reversed.
    pub fn render_with<F>(&self, perspective: Perspective, glyph: F) -> String
    where
        F: Fn(Piece) -> char,
    {
        let cell = |row: usize, col: usize| -> char {
            let border_row = row == 0 || row == BOARD_WIDTH - 1;
            let border_col = col == 0 || col == BOARD_WIDTH - 1;
            match (border_row, border_col) {
                (true, true) => ' ',
                (true, false) => (b'a' + col as u8 - 1) as char,
                (false, true) => (b'9' - row as u8) as char,
                (false, false) => self.grid[row][col].map(&glyph).unwrap_or(EMPTY_TILE),
            }
        };

        let order: Vec<usize> = match perspective {
            Perspective::White => (0..BOARD_WIDTH).collect(),
            Perspective::Black => (0..BOARD_WIDTH).rev().collect(),
        };

        let mut out = String::with_capacity(BOARD_WIDTH * BOARD_WIDTH * 2 * 3);
        for &row in &order {
            for (i, &col) in order.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push(cell(row, col));
            }
            out.push('\n');
        }
        out
    }
}
