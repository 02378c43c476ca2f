use serde::{Deserialize, Serialize};

/// Which part of the board a cell belongs to. The wings are single rows
/// sitting beside the ground layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Area {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Position {
    pub area: Area,
    pub layer: usize,
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(layer: usize, row: usize, col: usize) -> Self {
        Self {
            area: Area::Center,
            layer,
            row,
            col,
        }
    }

    pub fn left_wing(col: usize) -> Self {
        Self {
            area: Area::Left,
            layer: 0,
            row: 0,
            col,
        }
    }

    pub fn right_wing(col: usize) -> Self {
        Self {
            area: Area::Right,
            layer: 0,
            row: 0,
            col,
        }
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.area {
            Area::Left => write!(f, "left:{}", self.col),
            Area::Right => write!(f, "right:{}", self.col),
            Area::Center => write!(f, "{}:{}:{}", self.layer, self.row, self.col),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
