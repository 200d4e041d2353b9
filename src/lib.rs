//! Terminal client for two-player networked chess
//!
//! Connects to a `netchess-server`, shows the boards it sends and forwards
//! the player's moves.

pub mod core;
pub mod input;
pub mod networking;

pub use crate::core::{ClientArgs, ClientConfig, ClientError, ClientResult};
pub use networking::ChessClient;
