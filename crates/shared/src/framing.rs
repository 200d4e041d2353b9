//! Async line framing over `tokio` streams
//!
//! The helpers are generic over [`AsyncBufRead`] / [`AsyncWrite`] so the
//! same code drives a `TcpStream` half in production and an in-memory
//! duplex pipe in tests.

use crate::error::{ProtocolError, ProtocolResult};
use crate::protocol::{ClientCommand, ServerFrame, Terminator, MAX_LINE_BYTES};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

/// Read one line without its line ending
///
/// Bytes that are not UTF-8 are replaced with U+FFFD rather than failing,
/// so a garbled line reaches the command parser and is rejected there.
///
/// # Errors
///
/// [`ProtocolError::ConnectionClosed`] at end of stream.
/// [`ProtocolError::LineTooLong`] if no newline arrives within
/// [`MAX_LINE_BYTES`].
pub async fn read_line<R>(reader: &mut R) -> ProtocolResult<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut bytes = Vec::new();
    let read = (&mut *reader)
        .take(MAX_LINE_BYTES as u64)
        .read_until(b'\n', &mut bytes)
        .await?;
    if read == 0 {
        return Err(ProtocolError::ConnectionClosed);
    }
    if read == MAX_LINE_BYTES && bytes.last() != Some(&b'\n') {
        return Err(ProtocolError::LineTooLong {
            limit: MAX_LINE_BYTES,
        });
    }

    let mut line = String::from_utf8_lossy(&bytes).into_owned();
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    trace!("[NETWORK] <- {:?}", line);
    Ok(line)
}

/// Read lines until a terminator, handing each text line to `on_line` as it arrives
///
/// Lines are delivered immediately so a caller can print a board while the
/// rest of the transmission is still in flight.
///
/// # Errors
///
/// [`ProtocolError::ConnectionClosed`] if the stream ends before a
/// terminator, even part-way through a frame.
pub async fn read_frame<R, F>(reader: &mut R, mut on_line: F) -> ProtocolResult<ServerFrame>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str),
{
    let mut frame = ServerFrame::new();
    loop {
        let line = read_line(reader).await?;
        if let Some(terminator) = Terminator::from_line(&line) {
            frame.terminator = Some(terminator);
            return Ok(frame);
        }
        on_line(&line);
        frame.lines.push(line);
    }
}

/// Read a whole frame without a callback
pub async fn collect_frame<R>(reader: &mut R) -> ProtocolResult<ServerFrame>
where
    R: AsyncBufRead + Unpin,
{
    read_frame(reader, |_| {}).await
}

/// Write a frame and flush it
pub async fn write_frame<W>(writer: &mut W, frame: &ServerFrame) -> ProtocolResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(frame.encode().as_bytes()).await?;
    writer.flush().await?;
    trace!(
        "[NETWORK] -> {} line(s), terminator {:?}",
        frame.lines.len(),
        frame.terminator
    );
    Ok(())
}

/// Read one client command
///
/// A line that does not parse comes back as
/// [`ProtocolError::MalformedCommand`]; the connection is still usable.
pub async fn read_command<R>(reader: &mut R) -> ProtocolResult<ClientCommand>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader).await?;
    ClientCommand::parse(&line)
}

/// Send one client command
pub async fn write_command<W>(writer: &mut W, command: &ClientCommand) -> ProtocolResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(command.to_line().as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
