//! Error types for the client

use shared::ProtocolError;
use thiserror::Error;

/// Errors that end a client session
#[derive(Error, Debug)]
pub enum ClientError {
    /// Could not reach the server
    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server connection failed or closed mid-game
    #[error("Server communication failed: {0}")]
    Protocol(#[from] ProtocolError),

    /// Reading the keyboard or writing the terminal failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Standard input closed while a move was expected
    #[error("Input closed before the game finished")]
    InputClosed,
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
