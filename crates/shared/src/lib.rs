//! Wire protocol shared by the chess server and client
//!
//! - `protocol` - commands, terminator sentinels and server frames
//! - `framing` - async line I/O over any `tokio` reader/writer
//! - `glyphs` - how pieces are drawn on the rendered board
//! - `settings` - JSON settings files for both binaries

pub mod error;
pub mod framing;
pub mod glyphs;
pub mod protocol;
pub mod settings;

pub use error::{ProtocolError, ProtocolResult};
pub use glyphs::{GlyphStyle, GlyphTable};
pub use protocol::{ClientCommand, ServerFrame, Terminator};
