//! Piece glyphs for the text board
//!
//! The engine renders through [`Board::render_with`]; this module owns the
//! lookup table that turns a piece into the character a terminal shows.

use crate::error::ProtocolError;
use chess_engine::{Board, Color, Perspective, Piece, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which glyph set to draw the board with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Chess symbols (♙ ♖ ♘ ♗ ♕ ♔ / ♟ ♜ ♞ ♝ ♛ ♚)
    #[default]
    Unicode,
    /// Piece letters, uppercase for White
    Letters,
}

impl GlyphStyle {
    pub fn table(self) -> GlyphTable {
        match self {
            GlyphStyle::Unicode => GlyphTable::unicode(),
            GlyphStyle::Letters => GlyphTable::letters(),
        }
    }
}

impl FromStr for GlyphStyle {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(GlyphStyle::Unicode),
            "letters" | "ascii" => Ok(GlyphStyle::Letters),
            _ => Err(ProtocolError::UnknownGlyphStyle {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GlyphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphStyle::Unicode => f.write_str("unicode"),
            GlyphStyle::Letters => f.write_str("letters"),
        }
    }
}

/// Glyph per (color, kind), indexed `[color][kind]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: [[char; 6]; 2],
}

const fn kind_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::Pawn => 0,
        PieceKind::Rook => 1,
        PieceKind::Knight => 2,
        PieceKind::Bishop => 3,
        PieceKind::Queen => 4,
        PieceKind::King => 5,
    }
}

const fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

impl GlyphTable {
    pub fn unicode() -> Self {
        Self {
            glyphs: [
                ['♙', '♖', '♘', '♗', '♕', '♔'],
                ['♟', '♜', '♞', '♝', '♛', '♚'],
            ],
        }
    }

    pub fn letters() -> Self {
        Self {
            glyphs: [
                ['P', 'R', 'N', 'B', 'Q', 'K'],
                ['p', 'r', 'n', 'b', 'q', 'k'],
            ],
        }
    }

    pub fn glyph(&self, piece: Piece) -> char {
        self.glyphs[color_index(piece.color)][kind_index(piece.kind)]
    }

    /// The board from one side, drawn with this table
    pub fn render(&self, board: &Board, perspective: Perspective) -> String {
        board.render_with(perspective, |piece| self.glyph(piece))
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        GlyphStyle::default().table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_match_engine_rendering() {
        let board = Board::new_game();
        for perspective in [Perspective::White, Perspective::Black] {
            assert_eq!(
                GlyphTable::letters().render(&board, perspective),
                board.to_display_string(perspective)
            );
        }
    }

    #[test]
    fn test_unicode_glyphs() {
        let table = GlyphTable::unicode();
        assert_eq!(table.glyph(Piece::new(PieceKind::King, Color::White)), '♔');
        assert_eq!(table.glyph(Piece::new(PieceKind::Pawn, Color::Black)), '♟');

        let text = table.render(&Board::new_game(), Perspective::White);
        assert_eq!(text.lines().nth(1), Some("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8"));
        assert_eq!(text.lines().nth(8), Some("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1"));
    }

    #[test]
    fn test_every_piece_has_its_own_glyph() {
        for table in [GlyphTable::unicode(), GlyphTable::letters()] {
            let mut seen = std::collections::HashSet::new();
            for color in Color::ALL {
                for kind in PieceKind::ALL {
                    assert!(seen.insert(table.glyph(Piece::new(kind, color))));
                }
            }
            assert_eq!(seen.len(), 12);
        }
    }

    #[test]
    fn test_glyph_style_parsing() {
        assert_eq!("Unicode".parse::<GlyphStyle>().unwrap(), GlyphStyle::Unicode);
        assert_eq!("letters".parse::<GlyphStyle>().unwrap(), GlyphStyle::Letters);
        assert!("emoji".parse::<GlyphStyle>().is_err());
    }

    #[test]
    fn test_glyph_style_serde() {
        let json = serde_json::to_string(&GlyphStyle::Letters).unwrap();
        assert_eq!(json, "\"letters\"");
        let style: GlyphStyle = serde_json::from_str("\"unicode\"").unwrap();
        assert_eq!(style, GlyphStyle::Unicode);
    }
}
