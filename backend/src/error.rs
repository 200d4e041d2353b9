//! Error types for the server

use chess_engine::{ChessEngineError, Color};
use shared::ProtocolError;
use thiserror::Error;

/// Errors that end a server run
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to accept connection: {0}")]
    Accept(#[source] std::io::Error),

    /// A player's connection failed; the match cannot continue
    #[error("Lost connection to {color}: {source}")]
    PlayerDisconnected {
        color: Color,
        #[source]
        source: ProtocolError,
    },

    /// The rules engine hit a broken invariant (e.g. a missing king)
    #[error("Game engine error: {0}")]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;
