//! Match Server Integration Tests
//!
//! Two TCP clients on localhost play against a server task:
//! - Start-up handshake and turn prompts
//! - Rejected and malformed moves
//! - Checkmate, resignation and disconnect endings

use backend::{play_match, ServerError};
use chess_engine::{Color, GameStatus};
use shared::framing::{collect_frame, read_line};
use shared::{GlyphTable, ServerFrame, Terminator};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.expect("connect");
        let (reader, writer) = stream.into_split();
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    async fn line(&mut self) -> String {
        timeout(WAIT, read_line(&mut self.reader))
            .await
            .expect("timed out waiting for a line")
            .expect("read line")
    }

    async fn frame(&mut self) -> ServerFrame {
        timeout(WAIT, collect_frame(&mut self.reader))
            .await
            .expect("timed out waiting for a frame")
            .expect("read frame")
    }

    async fn send(&mut self, line: &str) {
        self.send_bytes(format!("{line}\n").as_bytes()).await;
    }

    async fn send_bytes(&mut self, bytes: &[u8]) {
        self.writer.write_all(bytes).await.unwrap();
    }
}

fn contains(frame: &ServerFrame, text: &str) -> bool {
    frame.lines.iter().any(|line| line.contains(text))
}

/// Start a server task and connect White then Black
async fn start_match() -> (JoinHandle<Result<GameStatus, ServerError>>, TestClient, TestClient) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move { play_match(&listener, GlyphTable::letters()).await });

    let mut white = TestClient::connect(addr).await;
    assert_eq!(
        white.line().await,
        "Connection to server successful. Waiting for opponent to connect..."
    );
    let black = TestClient::connect(addr).await;
    (server, white, black)
}

// ============================================================================
// Handshake Tests
// ============================================================================

#[tokio::test]
async fn test_white_is_prompted_first() {
    let (server, mut white, mut black) = start_match().await;

    let first = white.frame().await;
    assert_eq!(first.terminator, Some(Terminator::Stop));
    assert!(contains(&first, "Opponent connected. Starting Game..."));
    assert!(contains(&first, "You are playing White."));
    assert!(contains(&first, "1 R N B Q K B N R 1"), "White sees rank 1 at the bottom");

    white.send("e2 e4").await;
    let black_first = black.frame().await;
    assert_eq!(black_first.terminator, Some(Terminator::Stop));
    assert!(contains(&black_first, "You are playing Black."));
    assert!(contains(&black_first, "Waiting for White to move..."));
    assert!(contains(&black_first, "White played e2 e4 (Pawn)."));
    assert!(contains(&black_first, "8 r n b k q b n r 8"), "Black sees its own side at the bottom");

    server.abort();
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[tokio::test]
async fn test_rejected_move_reprompts_mover_only() {
    let (server, mut white, mut black) = start_match().await;
    white.frame().await;

    white.send("e2 e5").await;
    let rejected = white.frame().await;
    assert_eq!(rejected.lines, vec!["Invalid Move: cannot move Pawn there."]);
    assert_eq!(rejected.terminator, Some(Terminator::Stop));

    white.send("e7 e5").await;
    let not_yours = white.frame().await;
    assert_eq!(not_yours.lines, vec!["Invalid Move: the piece on e7 is not yours."]);

    white.send("hello").await;
    let malformed = white.frame().await;
    assert!(contains(&malformed, "Invalid Move: could not read"));

    white.send("d2 d4").await;
    let black_view = black.frame().await;
    assert!(!contains(&black_view, "Invalid Move"), "rejections go to the mover only");
    assert!(contains(&black_view, "White played d2 d4 (Pawn)."));

    server.abort();
}

#[tokio::test]
async fn test_garbled_bytes_are_rejected_not_fatal() {
    let (server, mut white, mut black) = start_match().await;
    white.frame().await;

    white.send_bytes(b"\xff\xfe e4\n").await;
    let rejected = white.frame().await;
    assert_eq!(rejected.terminator, Some(Terminator::Stop));
    assert!(contains(&rejected, "Invalid Move: could not read"));

    white.send("e2 e4").await;
    let black_view = black.frame().await;
    assert!(contains(&black_view, "White played e2 e4 (Pawn)."));

    server.abort();
}

#[tokio::test]
async fn test_endless_line_drops_sender() {
    let (server, mut white, mut black) = start_match().await;
    white.frame().await;

    white.send_bytes(&vec![b'a'; shared::protocol::MAX_LINE_BYTES + 1]).await;

    let black_last = black.frame().await;
    assert_eq!(black_last.terminator, Some(Terminator::End));
    assert!(contains(&black_last, "White disconnected. Closing server."));

    let result = timeout(WAIT, server).await.unwrap().unwrap();
    assert!(matches!(
        result,
        Err(ServerError::PlayerDisconnected {
            source: shared::ProtocolError::LineTooLong { .. },
            ..
        })
    ));
}

// ============================================================================
// Ending Tests
// ============================================================================

#[tokio::test]
async fn test_fools_mate_over_the_wire() {
    let (server, mut white, mut black) = start_match().await;
    white.frame().await;

    white.send("f2 f3").await;
    black.frame().await;
    black.send("e7 e5").await;
    white.frame().await;
    white.send("g2 g4").await;
    black.frame().await;
    black.send("d8 h4").await;

    for client in [&mut white, &mut black] {
        let last = client.frame().await;
        assert_eq!(last.terminator, Some(Terminator::End));
        assert!(contains(&last, "Checkmate! Black wins."));
    }

    let status = server.await.unwrap().unwrap();
    assert_eq!(status, GameStatus::Checkmate { winner: Color::Black });
}

#[tokio::test]
async fn test_check_is_announced_to_both() {
    let (server, mut white, mut black) = start_match().await;
    white.frame().await;

    white.send("e2 e4").await;
    black.frame().await;
    black.send("f7 f6").await;
    white.frame().await;
    white.send("d1 h5").await;

    let black_view = black.frame().await;
    assert!(contains(&black_view, "Check! Black is in check."));
    black.send("g7 g6").await;
    let white_view = white.frame().await;
    assert!(contains(&white_view, "Check! Black is in check."));
    assert!(contains(&white_view, "Black played g7 g6 (Pawn)."));

    server.abort();
}

#[tokio::test]
async fn test_resignation_ends_game() {
    let (server, mut white, mut black) = start_match().await;
    white.frame().await;

    white.send("quit").await;

    let white_last = white.frame().await;
    let black_last = black.frame().await;
    for last in [&white_last, &black_last] {
        assert_eq!(last.terminator, Some(Terminator::End));
        assert!(contains(last, "White resigned. Black wins."));
    }

    let status = server.await.unwrap().unwrap();
    assert_eq!(status, GameStatus::Resigned { winner: Color::Black });
}

#[tokio::test]
async fn test_disconnect_is_fatal() {
    let (server, mut white, mut black) = start_match().await;
    white.frame().await;
    drop(white);

    let black_last = black.frame().await;
    assert_eq!(black_last.terminator, Some(Terminator::End));
    assert!(contains(&black_last, "White disconnected. Closing server."));

    let result = timeout(WAIT, server).await.unwrap().unwrap();
    assert!(matches!(
        result,
        Err(ServerError::PlayerDisconnected { color: Color::White, .. })
    ));
}
