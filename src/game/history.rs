use log::trace;

use crate::model::{GameBoard, MoveRecord};

/// Undo stack of matched pairs, newest last.
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_move(&mut self, record: MoveRecord) {
        trace!(target: "history", "Recording move {:?}", record.positions());
        self.moves.push(record);
    }

    /// Pops the newest move and puts its tiles back on `board`. Returns the
    /// reverted move, or `None` when there is nothing to undo.
    pub fn undo(&mut self, board: &mut GameBoard) -> Option<MoveRecord> {
        let record = self.moves.pop()?;
        for removed in &record.removed {
            let restored = board
                .index_of(&removed.position)
                .is_some_and(|index| board.restore(index, removed.tile.clone()));
            if !restored {
                log::error!(
                    target: "history",
                    "Could not restore {:?} at {:?}",
                    removed.tile,
                    removed.position
                );
            }
        }
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
