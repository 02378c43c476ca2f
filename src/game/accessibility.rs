use log::trace;

use crate::model::{Area, GameBoard, Position};

/// Whether the tile at `index` can be picked up. Padding, cleared and out of
/// range cells are never accessible.
///
/// A tile must pass two independent tests: nothing in the layer above rests
/// on it, and it sits at an open end of its row. The ground layer's closed
/// rows are additionally shut on the left while the left wing holds a tile
/// and on the right while the right wing does, and the right wing only opens
/// from its outer end.
pub fn is_accessible(board: &GameBoard, index: usize) -> bool {
    if !board.is_occupied(index) {
        return false;
    }

    if board.is_covered(index) {
        trace!(target: "accessibility", "{:?} is covered", board.layout().position(index));
        return false;
    }

    let Some((first, last)) = board.row_ends(index) else {
        return false;
    };
    let is_first = index == first;
    let is_last = index == last;

    if board.layout().is_closed_row(index)
        && ((is_first && board.wing_has_tiles(Area::Left))
            || (is_last && board.wing_has_tiles(Area::Right)))
    {
        trace!(target: "accessibility", "{:?} is closed off by a wing", board.layout().position(index));
        return false;
    }

    if board.layout().position(index).area == Area::Right
        && is_first
        && board.row_occupied_count(index) > 1
    {
        return false;
    }

    is_first || is_last
}

pub fn is_position_accessible(board: &GameBoard, position: &Position) -> bool {
    board
        .index_of(position)
        .is_some_and(|index| is_accessible(board, index))
}

pub fn accessible_indices(board: &GameBoard) -> Vec<usize> {
    board
        .occupied_indices()
        .filter(|index| is_accessible(board, *index))
        .collect()
}
