use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub rows: usize,
    pub cols: usize,
    /// Width of the centered tile span of each row. Absent means every cell
    /// of the row holds a tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles_per_row: Option<Vec<usize>>,
}

impl LayerSpec {
    pub fn full(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles_per_row: None,
        }
    }

    pub fn span(&self, row: usize) -> usize {
        self.tiles_per_row
            .as_ref()
            .and_then(|spans| spans.get(row).copied())
            .unwrap_or(self.cols)
    }

    /// first tile-bearing column of `row`
    pub fn padding(&self, row: usize) -> usize {
        (self.cols - self.span(row)) / 2
    }

    pub fn tile_cells(&self) -> usize {
        (0..self.rows).map(|row| self.span(row)).sum()
    }
}

/// Geometry of a board: stacked layers bottom to top, plus the two ground
/// level wings and the central rows they close off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub left_wing: usize,
    #[serde(default)]
    pub right_wing: usize,
    #[serde(default)]
    pub closed_rows: Vec<usize>,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::pyramid()
    }
}

impl LayoutSpec {
    pub fn pyramid() -> Self {
        Self {
            layers: vec![
                LayerSpec {
                    rows: 8,
                    cols: 12,
                    tiles_per_row: Some(vec![12, 8, 10, 12, 12, 10, 8, 12]),
                },
                LayerSpec::full(6, 6),
                LayerSpec::full(4, 4),
                LayerSpec::full(2, 2),
                LayerSpec::full(1, 1),
            ],
            left_wing: 1,
            right_wing: 2,
            closed_rows: vec![3, 4],
        }
    }

    /// A layout without wings, mostly useful for small boards.
    pub fn stacked(layers: Vec<LayerSpec>) -> Self {
        Self {
            layers,
            left_wing: 0,
            right_wing: 0,
            closed_rows: vec![],
        }
    }

    pub fn tile_cells(&self) -> usize {
        self.layers.iter().map(LayerSpec::tile_cells).sum::<usize>()
            + self.left_wing
            + self.right_wing
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.layers.is_empty() {
            return Err(GameError::InvalidLayout("no layers".to_string()));
        }
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.rows == 0 || layer.cols == 0 {
                return Err(GameError::InvalidLayout(format!(
                    "layer {} has an empty dimension ({}x{})",
                    index, layer.rows, layer.cols
                )));
            }
            if let Some(spans) = &layer.tiles_per_row {
                if spans.len() != layer.rows {
                    return Err(GameError::InvalidLayout(format!(
                        "layer {} declares {} spans for {} rows",
                        index,
                        spans.len(),
                        layer.rows
                    )));
                }
                for (row, span) in spans.iter().enumerate() {
                    if *span > layer.cols || (layer.cols - span) % 2 != 0 {
                        return Err(GameError::InvalidLayout(format!(
                            "layer {} row {} span {} cannot be centered in {} columns",
                            index, row, span, layer.cols
                        )));
                    }
                }
            }
            if index > 0 {
                let below = &self.layers[index - 1];
                if layer.rows > below.rows || layer.cols > below.cols {
                    return Err(GameError::InvalidLayout(format!(
                        "layer {} ({}x{}) overhangs the layer beneath ({}x{})",
                        index, layer.rows, layer.cols, below.rows, below.cols
                    )));
                }
            }
        }
        if let Some(row) = self.closed_rows.iter().find(|row| **row >= self.layers[0].rows) {
            return Err(GameError::InvalidLayout(format!(
                "closed row {} is outside the ground layer",
                row
            )));
        }
        Ok(())
    }
}
