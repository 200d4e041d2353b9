//! Check, checkmate and stalemate resolution
//!
//! Answers the questions the game session asks after every move:
//!
//! - [`can_escape`]: can the king step to a neighbouring square where it is
//!   no longer attacked?
//! - [`can_obstruct`]: can another piece capture the single checking piece or
//!   step between it and the king?
//! - [`classify`]: not in check, in check, or checkmate
//! - [`has_any_legal_move`]: is there any move at all (stalemate support)?
//!
//! ## Probing
//!
//! Each candidate move is tried on a copy of the board ([`probe`]) and the
//! copy is inspected for check. The caller's board is borrowed immutably
//! throughout, so no probe can leave a half-made move behind, including on an
//! error path, and probes can nest freely.
//!
//! ## Double check
//!
//! When two pieces give check at once, no single capture or interposition
//! answers both, so [`can_obstruct`] returns `false` without searching and only
//! a king move can save the position.

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::make_unmake::make_move;
use crate::move_gen::king::KING_STEPS;
use crate::move_gen::sliding::squares_between;
use crate::move_gen::{checkers, is_in_check, is_legal_move, legal_destinations};
use crate::types::*;
use tracing::{debug, trace};

/// The position after moving `from` → `to`, leaving `board` as it was
pub fn probe(board: &Board, from: Square, to: Square) -> Board {
    let mut snapshot = *board;
    make_move(&mut snapshot, from, to);
    snapshot
}

/// True if moving `from` → `to` leaves `color`'s king unattacked
fn probe_is_safe(board: &Board, from: Square, to: Square, color: Color) -> ChessEngineResult<bool> {
    let safe = !is_in_check(&probe(board, from, to), color)?;
    trace!("[RESOLVER] probe {}{} for {}: safe={}", from, to, color, safe);
    Ok(safe)
}

/// Check if `color`'s king can step out of check
///
/// Tries each of the up to eight neighbouring squares the king rule allows,
/// stopping at the first one that is not attacked after the move.
pub fn can_escape(board: &Board, color: Color) -> ChessEngineResult<bool> {
    let king = board.king_square(color)?;

    for (dx, dy) in KING_STEPS {
        let Some(target) = king.offset(dx, dy) else {
            continue;
        };
        if is_legal_move(board, king, target) && probe_is_safe(board, king, target, color)? {
            debug!("[RESOLVER] {} king escapes {} -> {}", color, king, target);
            return Ok(true);
        }
    }

    Ok(false)
}

/// Check if the check on `color` can be answered by capturing or blocking
///
/// - No checker or more than one checker: `false`.
/// - Otherwise any friendly piece (king included) that can safely capture the
///   checker succeeds.
/// - For a rook, bishop or queen, any friendly non-king piece that can safely
///   move onto a square strictly between the checker and the king succeeds.
///
/// "Safely" means the defending side is not in check afterwards, which rules
/// out pinned defenders.
pub fn can_obstruct(board: &Board, color: Color) -> ChessEngineResult<bool> {
    let king = board.king_square(color)?;
    let attackers = checkers(board, color)?;

    let &[attacker] = attackers.as_slice() else {
        if attackers.len() > 1 {
            debug!("[RESOLVER] double check on {} king at {}", color, king);
        }
        return Ok(false);
    };

    let defenders: Vec<(Square, Piece)> = board.pieces(color).collect();

    // Capture the checking piece
    for &(from, _) in &defenders {
        if is_legal_move(board, from, attacker) && probe_is_safe(board, from, attacker, color)? {
            debug!("[RESOLVER] {} captures checker on {} from {}", color, attacker, from);
            return Ok(true);
        }
    }

    let attacker_kind = board.piece_at(attacker).map(|piece| piece.kind);
    if !attacker_kind.is_some_and(PieceKind::is_slider) {
        return Ok(false);
    }

    // Interpose on the line between checker and king
    for between in squares_between(attacker, king) {
        for &(from, piece) in &defenders {
            if piece.kind == PieceKind::King {
                continue;
            }
            if is_legal_move(board, from, between) && probe_is_safe(board, from, between, color)? {
                debug!("[RESOLVER] {} blocks on {} from {}", color, between, from);
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Classify `color`'s position
///
/// # Errors
///
/// [`ChessEngineError::KingNotFound`] if `color` has no king.
pub fn classify(board: &Board, color: Color) -> ChessEngineResult<CheckStatus> {
    if !is_in_check(board, color)? {
        return Ok(CheckStatus::NotInCheck);
    }

    let status = if can_escape(board, color)? || can_obstruct(board, color)? {
        CheckStatus::InCheck
    } else {
        CheckStatus::Checkmate
    };
    debug!("[RESOLVER] {} is {:?}", color, status);
    Ok(status)
}

/// Check whether `color` has at least one move that does not leave its king in check
///
/// Every friendly piece's full destination set is searched (sliding pieces
/// included), so a `false` here really means stalemate.
///
/// # Errors
///
/// - [`ChessEngineError::InCheckPrecondition`] if `color` is in check; "no
///   legal move while in check" is checkmate, which [`classify`] decides
/// - [`ChessEngineError::KingNotFound`] if `color` has no king
pub fn has_any_legal_move(board: &Board, color: Color) -> ChessEngineResult<bool> {
    if is_in_check(board, color)? {
        return Err(ChessEngineError::InCheckPrecondition { color });
    }

    for (from, _) in board.pieces(color) {
        for to in legal_destinations(board, from) {
            if probe_is_safe(board, from, to, color)? {
                trace!("[RESOLVER] {} has legal move {}{}", color, from, to);
                return Ok(true);
            }
        }
    }

    debug!("[RESOLVER] {} has no legal move", color);
    Ok(false)
}
