//! Line-based wire protocol
//!
//! Everything on the wire is UTF-8 text, one message per `\n`-terminated
//! line.
//!
//! Client → Server: exactly one line per request, either a move
//! (`"e2 e4"`) or [`RESIGN_COMMAND`].
//!
//! Server → Client: any number of text lines, optionally closed by a
//! terminator line. [`Terminator::Stop`] hands control back to the client
//! (its turn to type); [`Terminator::End`] means the game is over. Lines sent
//! without a terminator are informational (e.g. the board shown to the
//! player who is waiting).

use crate::error::{ProtocolError, ProtocolResult};
use chess_engine::MoveRequest;
use std::fmt;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6174;

/// Sentinel closing a transmission that expects a reply
pub const END_OF_TRANSMISSION: &str = "$$STOP$$";
/// Sentinel closing the final transmission of a game
pub const END_OF_GAME: &str = "$$END$$";
/// Line a client sends to resign
pub const RESIGN_COMMAND: &str = "quit";
/// Longest line either side will buffer, line ending included
pub const MAX_LINE_BYTES: usize = 4096;

/// Separator printed around the game start banner
pub const RULE: &str =
    "================================================================================";

/// What a client asks the server to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientCommand {
    Move(MoveRequest),
    Resign,
}

impl ClientCommand {
    /// Parse one line received from a client
    ///
    /// Surrounding whitespace (including a trailing `\r`) is ignored.
    pub fn parse(line: &str) -> ProtocolResult<Self> {
        let line = line.trim();
        if line.eq_ignore_ascii_case(RESIGN_COMMAND) {
            return Ok(ClientCommand::Resign);
        }
        MoveRequest::parse(line)
            .map(ClientCommand::Move)
            .map_err(|_| ProtocolError::MalformedCommand {
                line: line.to_string(),
            })
    }

    /// Wire form, without the trailing newline
    pub fn to_line(&self) -> String {
        match self {
            ClientCommand::Move(request) => request.to_string(),
            ClientCommand::Resign => RESIGN_COMMAND.to_string(),
        }
    }
}

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// How a server transmission ends
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// `$$STOP$$`: the reader should now send a command
    Stop,
    /// `$$END$$`: the game is over
    End,
}

impl Terminator {
    pub fn as_line(self) -> &'static str {
        match self {
            Terminator::Stop => END_OF_TRANSMISSION,
            Terminator::End => END_OF_GAME,
        }
    }

    /// Recognise a terminator line (exact match after trimming line endings)
    pub fn from_line(line: &str) -> Option<Self> {
        match line.trim_end_matches(['\r', '\n']) {
            END_OF_TRANSMISSION => Some(Terminator::Stop),
            END_OF_GAME => Some(Terminator::End),
            _ => None,
        }
    }
}

/// One server transmission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerFrame {
    pub lines: Vec<String>,
    pub terminator: Option<Terminator>,
}

impl ServerFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text; embedded newlines become separate lines
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.lines.extend(text.as_ref().lines().map(str::to_string));
        self
    }

    /// Close the frame with `$$STOP$$`
    pub fn stop(mut self) -> Self {
        self.terminator = Some(Terminator::Stop);
        self
    }

    /// Close the frame with `$$END$$`
    pub fn end(mut self) -> Self {
        self.terminator = Some(Terminator::End);
        self
    }

    /// Wire form: every line followed by `\n`, then the terminator line
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        if let Some(terminator) = self.terminator {
            out.push_str(terminator.as_line());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Square;

    #[test]
    fn test_parse_move_command() {
        let command = ClientCommand::parse("e2 e4\r\n").unwrap();
        let expected = MoveRequest::new(Square::parse("e2").unwrap(), Square::parse("e4").unwrap());
        assert_eq!(command, ClientCommand::Move(expected));
        assert_eq!(command.to_line(), "e2 e4");
    }

    #[test]
    fn test_parse_resign_command() {
        assert_eq!(ClientCommand::parse("quit").unwrap(), ClientCommand::Resign);
        assert_eq!(ClientCommand::parse("QUIT").unwrap(), ClientCommand::Resign);
        assert_eq!(ClientCommand::Resign.to_line(), RESIGN_COMMAND);
    }

    #[test]
    fn test_parse_malformed_command() {
        for line in ["", "hello", "e2e4", "e2 e9", "e2 e4 e5"] {
            match ClientCommand::parse(line) {
                Err(ProtocolError::MalformedCommand { .. }) => {}
                other => panic!("{line:?} should be malformed, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_terminator_lines() {
        assert_eq!(Terminator::from_line("$$STOP$$"), Some(Terminator::Stop));
        assert_eq!(Terminator::from_line("$$END$$\r\n"), Some(Terminator::End));
        assert_eq!(Terminator::from_line(" $$END$$"), None);
        assert_eq!(Terminator::from_line("Your move."), None);
    }

    #[test]
    fn test_frame_encoding() {
        let frame = ServerFrame::new().text("line one\nline two").text("three").stop();
        assert_eq!(frame.lines.len(), 3);
        assert_eq!(frame.encode(), "line one\nline two\nthree\n$$STOP$$\n");

        let open = ServerFrame::new().text("waiting");
        assert_eq!(open.encode(), "waiting\n");
    }
}
