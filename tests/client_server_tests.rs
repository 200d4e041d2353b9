//! Client/Server Integration Tests
//!
//! Full games between two scripted clients and a real server task:
//! - Moves typed on the keyboard reach the server
//! - Invalid input stays local
//! - Both screens show the outcome

use backend::play_match;
use chess_engine::{Color, GameStatus};
use netchess::ChessClient;
use shared::framing::read_line;
use shared::GlyphTable;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(10);

type TcpClient = ChessClient<BufReader<OwnedReadHalf>, OwnedWriteHalf>;

async fn connect(addr: SocketAddr) -> (TcpClient, Vec<u8>) {
    let stream = TcpStream::connect(addr).await.unwrap();
    let (reader, writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    // White's greeting arrives before Black may connect; consume it here so
    // connection order is deterministic.
    let mut screen = Vec::new();
    if let Ok(Ok(line)) = timeout(Duration::from_millis(200), read_line(&mut reader)).await {
        screen.extend_from_slice(format!("{line}\n").as_bytes());
    }
    (ChessClient::new(reader, writer), screen)
}

#[tokio::test]
async fn test_scripted_fools_mate() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move { play_match(&listener, GlyphTable::unicode()).await });

    let (mut white, mut white_screen) = connect(addr).await;
    let (mut black, mut black_screen) = connect(addr).await;

    let mut white_keys: &[u8] = b"help\nf2-f3\nf2 f3\ng2 g4\n";
    let mut black_keys: &[u8] = b"e7 e5\nd8 h4\n";

    let (white_result, black_result) = timeout(WAIT, async {
        tokio::join!(
            white.run(&mut white_keys, &mut white_screen),
            black.run(&mut black_keys, &mut black_screen),
        )
    })
    .await
    .expect("game should finish");

    white_result.unwrap();
    black_result.unwrap();

    let white_text = String::from_utf8(white_screen).unwrap();
    let black_text = String::from_utf8(black_screen).unwrap();

    assert!(white_text.starts_with("Connection to server successful."));
    assert!(white_text.contains("TRY AGAIN: input was invalid"));
    assert!(white_text.contains("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1"));
    assert!(black_text.contains("You are playing Black."));
    for text in [&white_text, &black_text] {
        assert!(text.contains("Checkmate! Black wins."));
        assert!(!text.contains("$$STOP$$"));
    }

    let status = server.await.unwrap().unwrap();
    assert_eq!(status, GameStatus::Checkmate { winner: Color::Black });
}

#[tokio::test]
async fn test_scripted_resignation() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move { play_match(&listener, GlyphTable::letters()).await });

    let (mut white, mut white_screen) = connect(addr).await;
    let (mut black, mut black_screen) = connect(addr).await;

    let mut white_keys: &[u8] = b"e2 e4\n";
    let mut black_keys: &[u8] = b"resign\nyes\n";

    let (white_result, black_result) = timeout(WAIT, async {
        tokio::join!(
            white.run(&mut white_keys, &mut white_screen),
            black.run(&mut black_keys, &mut black_screen),
        )
    })
    .await
    .expect("game should finish");

    white_result.unwrap();
    let last = black_result.unwrap();
    assert!(last.lines.iter().any(|line| line == "Black resigned. White wins."));
    assert!(String::from_utf8(white_screen).unwrap().contains("Black resigned. White wins."));

    let status = server.await.unwrap().unwrap();
    assert_eq!(status, GameStatus::Resigned { winner: Color::White });
}
