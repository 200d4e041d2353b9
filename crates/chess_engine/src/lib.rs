//! Chess rules engine
//!
//! Board representation, per-piece move validation, single-step undo, and
//! check / checkmate / stalemate resolution for two-player chess, plus the
//! [`api::GameSession`] turn protocol built on them.
//!
//! The engine is synchronous and does no I/O. Transport and rendering live
//! in other crates and talk to it through [`api::GameSession`],
//! [`board::Board::render_with`] and the [`types`] values.
//!
//! Not supported: castling, en passant, promotion, repetition and
//! fifty-move draws.

pub mod api;
pub mod board;
pub mod error;
pub mod make_unmake;
pub mod move_gen;
pub mod resolver;
pub mod types;

pub use api::{GameSession, GameStatus, MoveRequest, MoveSummary, Rejection, TurnReport};
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use types::{CheckStatus, Color, Perspective, Piece, PieceKind, Square};
