use std::collections::HashMap;
use std::ops::Range;

use super::{Area, LayoutSpec, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellInfo {
    pub position: Position,
    pub tile_bearing: bool,
    pub row_group: usize,
}

/// A run of cells that are laced together left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
    pub area: Area,
    pub layer: usize,
    pub row: usize,
    pub cells: Range<usize>,
}

/// Immutable board skeleton: every cell in enumeration order, the rows they
/// belong to, and which cells of the layer above rest on each of them.
/// Cells are addressed by their index in that order.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    pub(crate) spec: LayoutSpec,
    pub(crate) cells: Vec<CellInfo>,
    pub(crate) rows: Vec<RowGroup>,
    pub(crate) index: HashMap<Position, usize>,
    pub(crate) covered_by: Vec<Vec<usize>>,
    pub(crate) resting_on: Vec<Vec<usize>>,
    pub(crate) left_wing: Option<usize>,
    pub(crate) right_wing: Option<usize>,
    pub(crate) tile_cells: usize,
}

impl BoardLayout {
    pub fn spec(&self) -> &LayoutSpec {
        &self.spec
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellInfo] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> &CellInfo {
        &self.cells[index]
    }

    pub fn position(&self, index: usize) -> Position {
        self.cells[index].position
    }

    pub fn index_of(&self, position: &Position) -> Option<usize> {
        self.index.get(position).copied()
    }

    pub fn rows(&self) -> &[RowGroup] {
        &self.rows
    }

    pub fn row_group_of(&self, index: usize) -> &RowGroup {
        &self.rows[self.cells[index].row_group]
    }

    /// cells of the next layer up that overlap `index`
    pub fn covered_by(&self, index: usize) -> &[usize] {
        &self.covered_by[index]
    }

    /// cells of the next layer down that `index` sits on
    pub fn resting_on(&self, index: usize) -> &[usize] {
        &self.resting_on[index]
    }

    pub fn wing(&self, area: Area) -> Option<&RowGroup> {
        match area {
            Area::Left => self.left_wing.map(|row| &self.rows[row]),
            Area::Right => self.right_wing.map(|row| &self.rows[row]),
            Area::Center => None,
        }
    }

    pub fn tile_cells(&self) -> usize {
        self.tile_cells
    }

    pub fn tile_cell_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.tile_bearing)
            .map(|(index, _)| index)
    }

    pub fn is_closed_row(&self, index: usize) -> bool {
        let position = self.cells[index].position;
        position.area == Area::Center
            && position.layer == 0
            && self.spec.closed_rows.contains(&position.row)
    }
}
