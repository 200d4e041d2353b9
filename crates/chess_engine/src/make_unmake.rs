//! Move making and unmaking
//!
//! [`make_move`] relocates a piece unconditionally and returns what is needed
//! to reverse it. [`MoveExecutor`] wraps that with a single-slot history: it
//! keeps exactly the last committed move, so one step can be taken back.
//!
//! Neither function checks legality. Validate with
//! [`crate::move_gen::is_legal_move`] first.

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// Information needed to undo a move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub from: Square,
    pub to: Square,
    /// Piece that stood on `from` (`None` if the origin was empty)
    pub moved: Option<Piece>,
    /// Piece that stood on `to` before the move
    pub captured: Option<Piece>,
}

/// Make a move on the board (returns undo information)
///
/// The origin is cleared first and the destination written second, so a
/// null move (`from == to`) leaves the board unchanged.
pub fn make_move(board: &mut Board, from: Square, to: Square) -> UndoRecord {
    let undo = UndoRecord {
        from,
        to,
        moved: board.piece_at(from),
        captured: board.piece_at(to),
    };

    board.set_piece(from, None);
    board.set_piece(to, undo.moved);

    undo
}

/// Unmake a move on the board
///
/// # Errors
///
/// [`ChessEngineError::MalformedUndoRecord`] when the board does not look like
/// the record was just applied to it. The board is left untouched in that
/// case.
pub fn unmake_move(board: &mut Board, undo: &UndoRecord) -> ChessEngineResult<()> {
    if board.piece_at(undo.to) != undo.moved {
        return Err(ChessEngineError::MalformedUndoRecord {
            reason: format!("expected {:?} on {}", undo.moved, undo.to),
        });
    }
    if undo.from != undo.to && board.piece_at(undo.from).is_some() {
        return Err(ChessEngineError::MalformedUndoRecord {
            reason: format!("origin {} is not empty", undo.from),
        });
    }

    board.set_piece(undo.to, undo.captured);
    board.set_piece(undo.from, undo.moved);
    Ok(())
}

/// Commits moves and remembers the most recent one
#[derive(Clone, Debug, Default)]
pub struct MoveExecutor {
    last: Option<UndoRecord>,
}

impl MoveExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relocate the piece on `from` to `to`, overwriting the previous record
    pub fn commit(&mut self, board: &mut Board, from: Square, to: Square) -> UndoRecord {
        let record = make_move(board, from, to);
        self.last = Some(record);
        record
    }

    /// Reverse the last committed move and clear the history
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::NoUndoHistory`] if nothing is recorded
    /// - [`ChessEngineError::MalformedUndoRecord`] if the board changed since
    ///   the commit; the record is kept and the board is not modified
    pub fn undo(&mut self, board: &mut Board) -> ChessEngineResult<UndoRecord> {
        let record = self.last.ok_or(ChessEngineError::NoUndoHistory)?;
        unmake_move(board, &record)?;
        self.last = None;
        Ok(record)
    }

    /// The move [`MoveExecutor::undo`] would reverse
    pub fn last_move(&self) -> Option<&UndoRecord> {
        self.last.as_ref()
    }
}
