//! Game client
//!
//! Mirrors the server's turn structure: print everything the server sends
//! until a terminator, then either ask the player for a move (`$$STOP$$`) or
//! finish (`$$END$$`).

use crate::core::{ClientConfig, ClientError, ClientResult};
use crate::input::{
    is_confirmation, parse_user_input, UserCommand, HELP_TEXT, INVALID_INPUT, PROMPT, RESIGN_PROMPT,
};
use shared::framing::{read_frame, write_command};
use shared::{ClientCommand, ServerFrame, Terminator};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Connection to the chess server
pub struct ChessClient<R, W> {
    reader: R,
    writer: W,
}

impl ChessClient<BufReader<OwnedReadHalf>, OwnedWriteHalf> {
    /// Open a TCP connection to the configured server
    pub async fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let addr = config.address();
        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| ClientError::Connect {
                addr: addr.clone(),
                source,
            })?;
        info!("[NETWORK] Connected to {}", addr);
        let (reader, writer) = stream.into_split();
        Ok(Self::new(BufReader::new(reader), writer))
    }
}

impl<R, W> ChessClient<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Play until the server ends the game
    ///
    /// `input` supplies the player's lines and `output` receives everything
    /// shown to them. Returns the final transmission.
    pub async fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> ClientResult<ServerFrame>
    where
        I: AsyncBufRead + Unpin,
        O: Write,
    {
        loop {
            let frame = self.print_transmission(output).await?;
            if frame.terminator == Some(Terminator::End) {
                info!("[NETWORK] Game finished");
                return Ok(frame);
            }

            let command = next_command(input, output).await?;
            debug!("[NETWORK] Sending {:?}", command);
            write_command(&mut self.writer, &command).await?;
        }
    }

    /// Print server lines as they arrive, up to the terminator
    async fn print_transmission<O: Write>(&mut self, output: &mut O) -> ClientResult<ServerFrame> {
        let mut write_error = None;
        let frame = read_frame(&mut self.reader, |line| {
            if write_error.is_none() {
                write_error = writeln!(output, "{line}").err();
            }
        })
        .await?;

        if let Some(err) = write_error {
            return Err(err.into());
        }
        output.flush()?;
        Ok(frame)
    }
}

/// Prompt until the player produces something to send
async fn next_command<I, O>(input: &mut I, output: &mut O) -> ClientResult<ClientCommand>
where
    I: AsyncBufRead + Unpin,
    O: Write,
{
    loop {
        let line = prompt(input, output, PROMPT).await?;
        match parse_user_input(&line) {
            UserCommand::Help => {
                for text in HELP_TEXT {
                    writeln!(output, "{text}")?;
                }
            }
            UserCommand::Resign => {
                let answer = prompt(input, output, RESIGN_PROMPT).await?;
                if is_confirmation(&answer) {
                    writeln!(output, "Resigning game...")?;
                    return Ok(ClientCommand::Resign);
                }
            }
            UserCommand::Move(request) => return Ok(ClientCommand::Move(request)),
            UserCommand::Invalid => writeln!(output, "{INVALID_INPUT}")?,
        }
    }
}

async fn prompt<I, O>(input: &mut I, output: &mut O, text: &str) -> ClientResult<String>
where
    I: AsyncBufRead + Unpin,
    O: Write,
{
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Err(ClientError::InputClosed);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(server_says: &'static str) -> ChessClient<&'static [u8], Vec<u8>> {
        ChessClient::new(server_says.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn test_invalid_input_is_not_sent() {
        let mut client = client("Your move\n$$STOP$$\nCheckmate! White wins.\n$$END$$\n");
        let mut keyboard: &[u8] = b"e2e4\nhelp\ne2 e4\n";
        let mut screen = Vec::new();

        let last = client.run(&mut keyboard, &mut screen).await.unwrap();
        assert_eq!(last.terminator, Some(Terminator::End));

        let sent = String::from_utf8(client.writer.clone()).unwrap();
        assert_eq!(sent, "e2 e4\n");

        let shown = String::from_utf8(screen).unwrap();
        assert!(shown.contains("Your move\n"));
        assert!(shown.contains(INVALID_INPUT));
        assert!(shown.contains("The accepted format of a move is:"));
        assert!(shown.contains("Checkmate! White wins."));
        assert!(!shown.contains("$$"), "terminators are never printed");
    }

    #[tokio::test]
    async fn test_resign_needs_confirmation() {
        let mut client = client("$$STOP$$\nWhite resigned. Black wins.\n$$END$$\n");
        let mut keyboard: &[u8] = b"resign\nno\nresign\nyes\n";
        let mut screen = Vec::new();

        client.run(&mut keyboard, &mut screen).await.unwrap();

        assert_eq!(String::from_utf8(client.writer.clone()).unwrap(), "quit\n");
        let shown = String::from_utf8(screen).unwrap();
        assert_eq!(shown.matches(RESIGN_PROMPT).count(), 2);
        assert!(shown.contains("Resigning game..."));
    }

    #[tokio::test]
    async fn test_server_hangup_is_error() {
        let mut client = client("board without end\n");
        let mut keyboard: &[u8] = b"";
        let mut screen = Vec::new();

        let result = client.run(&mut keyboard, &mut screen).await;
        assert!(matches!(
            result,
            Err(ClientError::Protocol(shared::ProtocolError::ConnectionClosed))
        ));
    }

    #[tokio::test]
    async fn test_keyboard_closed_is_error() {
        let mut client = client("$$STOP$$\n");
        let mut keyboard: &[u8] = b"";
        let mut screen = Vec::new();

        let result = client.run(&mut keyboard, &mut screen).await;
        assert!(matches!(result, Err(ClientError::InputClosed)));
    }
}
