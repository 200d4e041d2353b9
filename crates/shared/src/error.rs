//! Error types for the wire protocol

use thiserror::Error;

/// Errors that can occur while talking to a peer
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Socket read/write failure
    #[error("Connection I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer hung up, possibly in the middle of a transmission
    #[error("Connection closed by peer")]
    ConnectionClosed,

    /// The peer sent more than `limit` bytes without a newline
    #[error("Line exceeds {limit} bytes")]
    LineTooLong { limit: usize },

    /// A client line that is neither a move nor a resignation
    #[error("Malformed command: {line:?}")]
    MalformedCommand { line: String },

    #[error("Unknown glyph style: {name:?} (expected \"unicode\" or \"letters\")")]
    UnknownGlyphStyle { name: String },
}

impl ProtocolError {
    /// True if the session cannot continue after this error
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ProtocolError::Io(_) | ProtocolError::ConnectionClosed | ProtocolError::LineTooLong { .. }
        )
    }
}

/// Result type alias for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;
