//! Match server
//!
//! One run of the server hosts one game:
//!
//! 1. The first client to connect plays White and is told to wait.
//! 2. The second client plays Black; both are told the game is starting.
//! 3. Each turn both players get the board from their own side. The side to
//!    move gets a `$$STOP$$` and the server reads exactly one line from it.
//!    The waiting player's board has no terminator, so its client keeps
//!    listening.
//! 4. A rejected move goes back to the mover only, who is prompted again.
//! 5. Checkmate, stalemate or resignation is announced to both with
//!    `$$END$$`.
//!
//! A lost connection ends the match. The other player is told and the
//! error is returned.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use chess_engine::{Color, GameSession, GameStatus, MoveSummary, TurnReport};
use shared::framing::{read_command, write_frame};
use shared::protocol::RULE;
use shared::{ClientCommand, GlyphTable, ProtocolError, ServerFrame};
use std::net::SocketAddr;
use tokio::io::BufReader;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

/// One connected client
pub struct Player {
    pub color: Color,
    pub addr: SocketAddr,
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl Player {
    fn new(color: Color, stream: TcpStream, addr: SocketAddr) -> Self {
        let (reader, writer) = stream.into_split();
        Self {
            color,
            addr,
            reader: BufReader::new(reader),
            writer,
        }
    }

    async fn send(&mut self, frame: &ServerFrame) -> ServerResult<()> {
        write_frame(&mut self.writer, frame)
            .await
            .map_err(|source| ServerError::PlayerDisconnected {
                color: self.color,
                source,
            })
    }
}

/// Bind, host one match, and report how it ended
pub async fn run(config: &ServerConfig) -> ServerResult<GameStatus> {
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("[SERVER] Listening on {}", addr);

    let status = play_match(&listener, config.glyphs.table()).await?;
    info!("[SERVER] Closing server...");
    Ok(status)
}

/// Wait for White, then Black
///
/// White is told it is waiting as soon as it connects.
pub async fn accept_players(listener: &TcpListener) -> ServerResult<[Player; 2]> {
    info!("[SERVER] Waiting for first client to connect...");
    let (stream, addr) = listener.accept().await.map_err(ServerError::Accept)?;
    let mut white = Player::new(Color::White, stream, addr);
    info!("[NETWORK] White connected from {}", addr);
    white
        .send(&ServerFrame::new().text("Connection to server successful. Waiting for opponent to connect..."))
        .await?;

    info!("[SERVER] Waiting for second client to connect...");
    let (stream, addr) = listener.accept().await.map_err(ServerError::Accept)?;
    let black = Player::new(Color::Black, stream, addr);
    info!("[NETWORK] Black connected from {}", addr);

    Ok([white, black])
}

/// Accept two players and play a game between them
pub async fn play_match(listener: &TcpListener, glyphs: GlyphTable) -> ServerResult<GameStatus> {
    let players = accept_players(listener).await?;
    Match::new(players, glyphs).run().await
}

/// A game in progress between two connected players
pub struct Match {
    session: GameSession,
    players: [Player; 2],
    glyphs: GlyphTable,
    /// Lines shown to both players above the next board
    notices: Vec<String>,
}

impl Match {
    pub fn new(players: [Player; 2], glyphs: GlyphTable) -> Self {
        Self {
            session: GameSession::new(),
            players,
            glyphs,
            notices: Vec::new(),
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.players[0],
            Color::Black => &mut self.players[1],
        }
    }

    async fn send(&mut self, color: Color, frame: &ServerFrame) -> ServerResult<()> {
        self.player_mut(color).send(frame).await
    }

    /// Play until the game ends or a connection drops
    pub async fn run(mut self) -> ServerResult<GameStatus> {
        match self.play().await {
            Ok(status) => Ok(status),
            Err(err) => {
                error!("[SERVER] Match aborted: {}", err);
                self.abort(&err).await;
                Err(err)
            }
        }
    }

    async fn play(&mut self) -> ServerResult<GameStatus> {
        self.send(
            Color::White,
            &ServerFrame::new()
                .text("Opponent connected. Starting Game...")
                .text(RULE)
                .text("You are playing White."),
        )
        .await?;
        self.send(
            Color::Black,
            &ServerFrame::new()
                .text("Connected to server. Starting Game...")
                .text(RULE)
                .text("You are playing Black."),
        )
        .await?;
        info!("[GAME] Starting game");

        loop {
            self.send_boards().await?;
            if let Some(status) = self.take_turn().await? {
                return Ok(status);
            }
        }
    }

    /// Board to both players; only the side to move is asked for input
    async fn send_boards(&mut self) -> ServerResult<()> {
        let mover = self.session.side_to_move();
        let notices = std::mem::take(&mut self.notices);

        for color in Color::ALL {
            let mut frame = ServerFrame::new();
            for notice in &notices {
                frame = frame.text(notice);
            }
            frame = frame.text(self.glyphs.render(self.session.board(), color.into()));
            frame = if color == mover {
                frame.text("Your move (e.g. \"e2 e4\"):").stop()
            } else {
                frame.text(format!("Waiting for {mover} to move..."))
            };
            self.send(color, &frame).await?;
        }
        Ok(())
    }

    /// Read commands from the side to move until one is accepted
    ///
    /// Returns the final status if the game ended this turn.
    async fn take_turn(&mut self) -> ServerResult<Option<GameStatus>> {
        let mover = self.session.side_to_move();

        loop {
            let player = self.player_mut(mover);
            let command = match read_command(&mut player.reader).await {
                Ok(command) => command,
                Err(source) if source.is_fatal() => {
                    return Err(ServerError::PlayerDisconnected {
                        color: mover,
                        source,
                    })
                }
                Err(err) => {
                    debug!("[GAME] {} sent an unreadable line: {}", mover, err);
                    let line = match &err {
                        ProtocolError::MalformedCommand { line } => line.as_str(),
                        _ => "",
                    };
                    let frame = ServerFrame::new()
                        .text(format!("Invalid Move: could not read {line:?}. Enter moves like \"e2 e4\"."))
                        .stop();
                    self.send(mover, &frame).await?;
                    continue;
                }
            };

            match command {
                ClientCommand::Resign => {
                    let status = self.session.resign(mover);
                    self.finish(status).await?;
                    return Ok(Some(status));
                }
                ClientCommand::Move(request) => match self.session.submit_move(mover, request)? {
                    TurnReport::Rejected(reason) => {
                        debug!("[GAME] {} {} rejected: {}", mover, request, reason);
                        self.send(mover, &ServerFrame::new().text(reason.to_string()).stop())
                            .await?;
                    }
                    TurnReport::Moved(summary) => {
                        self.notices.push(describe(&summary));
                        if summary.status.is_over() {
                            self.finish(summary.status).await?;
                            return Ok(Some(summary.status));
                        }
                        if summary.gives_check() {
                            self.notices.push(format!("Check! {} is in check.", mover.opponent()));
                        }
                        return Ok(None);
                    }
                },
            }
        }
    }

    /// Final board and outcome to both players, closed with `$$END$$`
    async fn finish(&mut self, status: GameStatus) -> ServerResult<()> {
        info!("[GAME] Game over: {}", status.message());
        let notices = std::mem::take(&mut self.notices);

        for color in Color::ALL {
            let mut frame = ServerFrame::new();
            for notice in &notices {
                frame = frame.text(notice);
            }
            let frame = frame
                .text(self.glyphs.render(self.session.board(), color.into()))
                .text(status.message())
                .text("Closing server...")
                .end();
            self.send(color, &frame).await?;
        }
        Ok(())
    }

    /// Best-effort notice to whoever is still connected
    async fn abort(&mut self, err: &ServerError) {
        let notice = match err {
            ServerError::PlayerDisconnected { color, .. } => {
                format!("{color} disconnected. Closing server.")
            }
            _ => "Internal server error. Closing server.".to_string(),
        };
        let frame = ServerFrame::new().text(notice).end();

        for color in Color::ALL {
            if matches!(err, ServerError::PlayerDisconnected { color: lost, .. } if *lost == color) {
                continue;
            }
            if let Err(e) = self.send(color, &frame).await {
                warn!("[NETWORK] Could not notify {}: {}", color, e);
            }
        }
    }
}

fn describe(summary: &MoveSummary) -> String {
    match summary.captured {
        Some(captured) => format!(
            "{} played {} {} ({} takes {}).",
            summary.mover, summary.from, summary.to, summary.piece.kind, captured.kind
        ),
        None => format!(
            "{} played {} {} ({}).",
            summary.mover, summary.from, summary.to, summary.piece.kind
        ),
    }
}
