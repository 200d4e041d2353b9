//! Game status and per-move reports

use super::moves::Rejection;
use crate::types::*;

/// Where the game stands
///
/// ```text
/// InProgress → Checkmate { winner } | Stalemate | Resigned { winner }
/// ```
///
/// Every state other than `InProgress` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate { winner: Color },
    /// Side to move has no legal move and is not in check (draw)
    Stalemate,
    Resigned { winner: Color },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// `None` while playing and for a draw
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Resigned { winner } => Some(*winner),
            GameStatus::InProgress | GameStatus::Stalemate => None,
        }
    }

    /// Announcement sent to both players
    pub fn message(&self) -> String {
        match self {
            GameStatus::InProgress => "Game in progress.".to_string(),
            GameStatus::Checkmate { winner } => format!("Checkmate! {winner} wins."),
            GameStatus::Stalemate => "Stalemate. The game is drawn.".to_string(),
            GameStatus::Resigned { winner } => {
                format!("{} resigned. {winner} wins.", winner.opponent())
            }
        }
    }
}

/// A move that was played
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveSummary {
    pub mover: Color,
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// The opponent's situation after the move
    pub opponent_status: CheckStatus,
    pub status: GameStatus,
}

impl MoveSummary {
    /// The opponent is in check but not mated
    pub fn gives_check(&self) -> bool {
        self.opponent_status == CheckStatus::InCheck
    }
}

/// Outcome of [`super::GameSession::submit_move`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnReport {
    /// Nothing changed; the same player moves again
    Rejected(Rejection),
    Moved(MoveSummary),
}
