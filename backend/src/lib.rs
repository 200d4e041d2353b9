//! Two-player chess server
//!
//! Accepts exactly two TCP clients (the first plays White), then drives a
//! [`chess_engine::GameSession`] over the line protocol in [`shared`].

pub mod config;
pub mod error;
pub mod game;

pub use config::{ServerArgs, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use game::{accept_players, play_match, run};
