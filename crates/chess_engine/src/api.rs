//! Public API for the chess engine
//!
//! The turn protocol that sits on top of the rules: whose move it is, what
//! happens to a rejected move, and when the game ends.
//!
//! ## Module Organization
//!
//! - `game` - [`GameSession`]: board, single-step undo, side to move, status
//! - `moves` - [`MoveRequest`] parsing and [`Rejection`] reasons
//! - `state` - [`GameStatus`] and the per-move [`TurnReport`]

mod game;
mod moves;
mod state;

pub use game::GameSession;
pub use moves::{MoveRequest, Rejection};
pub use state::{GameStatus, MoveSummary, TurnReport};
