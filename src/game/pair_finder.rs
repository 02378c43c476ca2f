use itertools::Itertools;
use log::debug;

use super::accessibility::accessible_indices;
use crate::model::GameBoard;

/// Hint search that resumes after the pair it found last time, so repeated
/// hints walk through the available pairs instead of repeating the first.
#[derive(Debug, Default, Clone)]
pub struct PairFinder {
    /// first cell of the last reported pair; `None` scans from the start
    cursor: Option<usize>,
}

impl PairFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Finds the next pair `(i, j)` with `i < j` in enumeration order, both
    /// accessible and of the same identity. Wraps around to the start once
    /// before giving up.
    pub fn find_next_pair(&mut self, board: &GameBoard) -> Option<(usize, usize)> {
        let accessible = accessible_indices(board);
        loop {
            let start = self.cursor;
            let found = accessible
                .iter()
                .copied()
                .tuple_combinations::<(usize, usize)>()
                .filter(|(i, _)| start.is_none_or(|cursor| *i > cursor))
                .find(|(i, j)| board.same_identity(*i, *j));

            match (found, start) {
                (Some((i, j)), _) => {
                    debug!(
                        target: "pair_finder",
                        "Found pair {:?} / {:?}",
                        board.layout().position(i),
                        board.layout().position(j)
                    );
                    self.cursor = Some(i);
                    return Some((i, j));
                }
                (None, None) => {
                    debug!(target: "pair_finder", "No pairs on the board");
                    return None;
                }
                (None, Some(_)) => {
                    self.cursor = None;
                }
            }
        }
    }
}
