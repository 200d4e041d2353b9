//! Core value types for the rules engine
//!
//! Every piece carries an explicit [`Color`]; nothing in the engine infers
//! ownership from letter case. Letters only appear in [`Piece::letter`] for
//! the plain-text board rendering.
//!
//! ## Squares
//!
//! A [`Square`] is always on the board: the only ways to build one
//! ([`Square::new`], [`Square::from_indices`], [`Square::parse`]) reject
//! anything outside `a..h` / `1..8`. Callers that hold a `Square` never need to
//! re-check bounds.
//!
//! The board stores its squares in a padded 10x10 grid (row/column 0 and 9
//! hold the axis labels in the rendered form), so the conversion is:
//!
//! ```text
//! row = 9 - rank        (rank 8 -> row 1, rank 1 -> row 8)
//! col = file - 'a' + 1  (file a -> col 1, file h -> col 8)
//! ```

use crate::error::{ChessEngineError, ChessEngineResult};
use std::fmt;
use std::str::FromStr;

/// Side of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first (White always moves first)
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn step ("forward" is fixed per color)
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank (1-8) the color's pawns start on; only these may double-step
    #[inline]
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank (1-8) holding the color's pieces in the opening position
    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Kind of chess piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Human-readable name used in rejection messages ("cannot move Pawn there")
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Uppercase initial ('N' for the knight)
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Rooks, bishops and queens move along lines and can be blocked
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece: kind plus owner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Text encoding: uppercase for White, lowercase for Black
    pub fn letter(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// One of the 64 squares
///
/// Stored as zero-based file (a = 0) and rank (1 = 0) indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build from a file letter (`'a'..='h'`, either case) and rank number (`1..=8`)
    pub fn new(file: char, rank: u8) -> ChessEngineResult<Self> {
        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return Err(ChessEngineError::InvalidSquare {
                input: format!("{file}{rank}"),
            });
        }
        Ok(Self {
            file: file as u8 - b'a',
            rank: rank - 1,
        })
    }

    /// Build from zero-based indices, `None` when either is off the board
    #[inline]
    pub fn from_indices(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Parse algebraic notation such as `e2` (case-insensitive)
    pub fn parse(input: &str) -> ChessEngineResult<Self> {
        let invalid = || ChessEngineError::InvalidSquare {
            input: input.to_string(),
        };
        let mut chars = input.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = rank.to_digit(10).ok_or_else(invalid)?;
        Self::new(file, rank as u8).map_err(|_| invalid())
    }

    /// Zero-based file index (a = 0)
    #[inline]
    pub fn file_index(self) -> i8 {
        self.file as i8
    }

    /// Zero-based rank index (rank 1 = 0)
    #[inline]
    pub fn rank_index(self) -> i8 {
        self.rank as i8
    }

    /// File letter, lowercase
    #[inline]
    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    /// Rank number, 1-8
    #[inline]
    pub fn rank_number(self) -> u8 {
        self.rank + 1
    }

    /// Square displaced by (file, rank) deltas, `None` off the board
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::from_indices(self.file_index() + file_delta, self.rank_index() + rank_delta)
    }

    /// Position in the padded 10x10 grid as `(row, col)`
    #[inline]
    pub fn to_padded(self) -> (usize, usize) {
        (9 - self.rank_number() as usize, self.file as usize + 1)
    }

    /// Inverse of [`Square::to_padded`]; border cells map to `None`
    pub fn from_padded(row: usize, col: usize) -> Option<Self> {
        if !(1..=8).contains(&row) || !(1..=8).contains(&col) {
            return None;
        }
        Self::from_indices(col as i8 - 1, 9 - row as i8 - 1)
    }

    /// All 64 squares, a1, b1, ..., h8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}

/// Board orientation for rendering
///
/// `White` lists rank 8 at the top with files a→h; `Black` is the same grid
/// mirrored top-bottom and left-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Perspective {
    #[default]
    White,
    Black,
}

impl From<Color> for Perspective {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Perspective::White,
            Color::Black => Perspective::Black,
        }
    }
}

/// Result of asking whether a side's king is attacked
///
/// A missing king is not a status: it surfaces as
/// [`ChessEngineError::KingNotFound`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    NotInCheck,
    /// In check, but some king move, capture or interposition resolves it
    InCheck,
    Checkmate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_parse_is_case_insensitive() {
        let lower = Square::parse("e2").unwrap();
        let upper = Square::parse("E2").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "e2");
    }

    #[test]
    fn test_square_parse_rejects_out_of_range() {
        for input in ["i1", "a0", "a9", "", "e", "e22", "22"] {
            assert!(Square::parse(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_padded_conversion_matches_layout() {
        let a8 = Square::parse("a8").unwrap();
        let h1 = Square::parse("h1").unwrap();
        assert_eq!(a8.to_padded(), (1, 1));
        assert_eq!(h1.to_padded(), (8, 8));
    }

    #[test]
    fn test_padded_conversion_round_trips() {
        for square in Square::all() {
            let (row, col) = square.to_padded();
            assert_eq!(Square::from_padded(row, col), Some(square));
        }
        assert_eq!(Square::from_padded(0, 4), None);
        assert_eq!(Square::from_padded(4, 9), None);
    }

    #[test]
    fn test_all_squares_are_distinct() {
        let squares: std::collections::HashSet<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
    }

    #[test]
    fn test_piece_letter_encodes_color() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).letter(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).letter(), 'n');
    }

    #[test]
    fn test_offset_stays_on_board() {
        let h8 = Square::parse("h8").unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-1, -1), Some(Square::parse("g7").unwrap()));
    }
}
