//! Game session: the turn protocol over the rules engine
//!
//! A [`GameSession`] owns the board for one game. Players take turns through
//! [`GameSession::submit_move`]; each accepted move is committed, checked for
//! self-check (and undone if it leaves the mover's king attacked), then the
//! opponent's position is classified to decide whether the game goes on.

use super::moves::{MoveRequest, Rejection};
use super::state::{GameStatus, MoveSummary, TurnReport};
use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::make_unmake::{MoveExecutor, UndoRecord};
use crate::move_gen::{is_in_check, is_legal_move};
use crate::resolver::{classify, has_any_legal_move};
use crate::types::*;
use tracing::{debug, info, warn};

/// One game between White and Black
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    executor: MoveExecutor,
    side_to_move: Color,
    status: GameStatus,
    ply: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Opening position, White to move
    pub fn new() -> Self {
        Self::from_board(Board::new_game(), Color::White)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            executor: MoveExecutor::new(),
            side_to_move,
            status: GameStatus::InProgress,
            ply: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Half-moves played (take-backs subtract)
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The move [`GameSession::take_back`] would revert
    pub fn last_move(&self) -> Option<&UndoRecord> {
        self.executor.last_move()
    }

    /// Board text from one side, letter pieces
    pub fn render(&self, perspective: Perspective) -> String {
        self.board.to_display_string(perspective)
    }

    /// Play `request` for `color`
    ///
    /// Ordinary problems (wrong turn, empty square, illegal piece move,
    /// self-check) come back as [`TurnReport::Rejected`] with the position
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::KingNotFound`] if a king is missing. The board is
    /// restored before the error is returned, but the session should be
    /// abandoned.
    pub fn submit_move(&mut self, color: Color, request: MoveRequest) -> ChessEngineResult<TurnReport> {
        let MoveRequest { from, to } = request;

        if self.status.is_over() {
            return Ok(TurnReport::Rejected(Rejection::GameOver));
        }
        if color != self.side_to_move {
            return Ok(TurnReport::Rejected(Rejection::NotYourTurn {
                to_move: self.side_to_move,
            }));
        }

        let Some(piece) = self.board.piece_at(from) else {
            return Ok(TurnReport::Rejected(Rejection::EmptySquare { square: from }));
        };
        if piece.color != color {
            return Ok(TurnReport::Rejected(Rejection::NotYourPiece { square: from }));
        }
        if !is_legal_move(&self.board, from, to) {
            debug!("[GAME] {} {} cannot move {} -> {}", color, piece.kind, from, to);
            return Ok(TurnReport::Rejected(Rejection::IllegalPieceMove { kind: piece.kind }));
        }

        let record = self.executor.commit(&mut self.board, from, to);

        match is_in_check(&self.board, color) {
            Ok(false) => {}
            Ok(true) => {
                self.executor.undo(&mut self.board)?;
                debug!("[GAME] {} {} -> {} rejected: self-check", color, from, to);
                return Ok(TurnReport::Rejected(Rejection::LeavesKingInCheck));
            }
            Err(err) => {
                self.executor.undo(&mut self.board)?;
                return Err(err);
            }
        }

        let opponent = color.opponent();
        let (opponent_status, status) = match judge(&self.board, color) {
            Ok(verdict) => verdict,
            Err(err) => {
                self.executor.undo(&mut self.board)?;
                return Err(err);
            }
        };
        self.status = status;

        self.side_to_move = opponent;
        self.ply += 1;

        info!("[GAME] {} played {} {} ({:?})", color, from, to, opponent_status);
        if self.status.is_over() {
            info!("[GAME] {}", self.status.message());
        }

        Ok(TurnReport::Moved(MoveSummary {
            mover: color,
            from,
            to,
            piece,
            captured: record.captured,
            opponent_status,
            status: self.status,
        }))
    }

    /// `color` gives up; the other side wins
    ///
    /// Has no effect once the game is over.
    pub fn resign(&mut self, color: Color) -> GameStatus {
        if !self.status.is_over() {
            self.status = GameStatus::Resigned {
                winner: color.opponent(),
            };
            info!("[GAME] {}", self.status.message());
        }
        self.status
    }

    /// Revert the most recent move and hand the turn back
    ///
    /// Only one move can be taken back; the history is cleared by doing so.
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::GameOver`] once the game has ended
    /// - [`ChessEngineError::NoUndoHistory`] if there is nothing to revert
    pub fn take_back(&mut self) -> ChessEngineResult<UndoRecord> {
        if self.status.is_over() {
            return Err(ChessEngineError::GameOver);
        }
        let record = self.executor.undo(&mut self.board).inspect_err(|err| {
            warn!("[GAME] take-back refused: {}", err);
        })?;
        self.side_to_move = self.side_to_move.opponent();
        self.ply = self.ply.saturating_sub(1);
        Ok(record)
    }
}

/// Opponent's check status and the resulting game status after `mover` moved
fn judge(board: &Board, mover: Color) -> ChessEngineResult<(CheckStatus, GameStatus)> {
    let opponent = mover.opponent();
    let check = classify(board, opponent)?;
    let status = match check {
        CheckStatus::Checkmate => GameStatus::Checkmate { winner: mover },
        CheckStatus::InCheck => GameStatus::InProgress,
        CheckStatus::NotInCheck => {
            if has_any_legal_move(board, opponent)? {
                GameStatus::InProgress
            } else {
                GameStatus::Stalemate
            }
        }
    };
    Ok((check, status))
}
