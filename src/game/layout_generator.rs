use std::collections::HashMap;

use log::debug;

use crate::error::GameResult;
use crate::model::{Area, BoardLayout, CellInfo, LayerSpec, LayoutSpec, Position, RowGroup};

/// Half-cell intervals: a cell at index `n` spans `[2n, 2n + 2)`.
fn overlaps(lower_start: i64, upper_start: i64) -> bool {
    upper_start < lower_start + 2 && upper_start + 2 > lower_start
}

struct Builder {
    cells: Vec<CellInfo>,
    rows: Vec<RowGroup>,
}

impl Builder {
    fn push_row(&mut self, area: Area, layer: usize, row: usize, cols: usize, span: usize) -> usize {
        let row_group = self.rows.len();
        let start = self.cells.len();
        let padding = (cols - span) / 2;
        for col in 0..cols {
            self.cells.push(CellInfo {
                position: Position {
                    area,
                    layer,
                    row,
                    col,
                },
                tile_bearing: col >= padding && col < padding + span,
                row_group,
            });
        }
        self.rows.push(RowGroup {
            area,
            layer,
            row,
            cells: start..self.cells.len(),
        });
        row_group
    }

    fn push_layer(&mut self, layer: usize, spec: &LayerSpec) {
        for row in 0..spec.rows {
            self.push_row(Area::Center, layer, row, spec.cols, spec.span(row));
        }
    }
}

/// Builds the board skeleton for `spec`. Cells are laid out layer by layer
/// from the bottom; the left wing opens the ground layer and the right wing
/// closes it.
pub fn generate_layout(spec: &LayoutSpec) -> GameResult<BoardLayout> {
    spec.validate()?;

    let mut builder = Builder {
        cells: Vec::with_capacity(spec.layers.iter().map(|l| l.rows * l.cols).sum()),
        rows: Vec::new(),
    };
    let mut left_wing = None;
    let mut right_wing = None;

    for (layer, layer_spec) in spec.layers.iter().enumerate() {
        if layer == 0 && spec.left_wing > 0 {
            left_wing = Some(builder.push_row(Area::Left, 0, 0, spec.left_wing, spec.left_wing));
        }
        builder.push_layer(layer, layer_spec);
        if layer == 0 && spec.right_wing > 0 {
            right_wing = Some(builder.push_row(Area::Right, 0, 0, spec.right_wing, spec.right_wing));
        }
    }

    let Builder { cells, rows } = builder;
    let index: HashMap<Position, usize> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| (cell.position, i))
        .collect();

    let mut covered_by = vec![Vec::new(); cells.len()];
    let mut resting_on = vec![Vec::new(); cells.len()];
    for (lower, cell) in cells.iter().enumerate() {
        let position = cell.position;
        if !cell.tile_bearing || position.area != Area::Center {
            continue;
        }
        let (Some(below), Some(above)) = (
            spec.layers.get(position.layer),
            spec.layers.get(position.layer + 1),
        ) else {
            continue;
        };
        let row_offset = (below.rows - above.rows) as i64;
        let col_offset = (below.cols - above.cols) as i64;
        for row in 0..above.rows {
            if !overlaps(2 * position.row as i64, 2 * row as i64 + row_offset) {
                continue;
            }
            for col in 0..above.cols {
                if !overlaps(2 * position.col as i64, 2 * col as i64 + col_offset) {
                    continue;
                }
                let upper = index[&Position::new(position.layer + 1, row, col)];
                if cells[upper].tile_bearing {
                    covered_by[lower].push(upper);
                    resting_on[upper].push(lower);
                }
            }
        }
    }

    let tile_cells = cells.iter().filter(|cell| cell.tile_bearing).count();
    debug!(
        target: "layout",
        "Generated layout: {} layers, {} cells, {} tile cells",
        spec.layers.len(),
        cells.len(),
        tile_cells
    );

    Ok(BoardLayout {
        spec: spec.clone(),
        cells,
        rows,
        index,
        covered_by,
        resting_on,
        left_wing,
        right_wing,
        tile_cells,
    })
}
