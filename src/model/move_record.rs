use serde::{Deserialize, Serialize};

use super::{Position, Tile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedTile {
    pub position: Position,
    pub tile: Tile,
}

/// Everything needed to put a matched pair back where it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub removed: Vec<RemovedTile>,
}

impl MoveRecord {
    pub fn new(removed: Vec<RemovedTile>) -> Self {
        Self { removed }
    }

    pub fn positions(&self) -> Vec<Position> {
        self.removed.iter().map(|removed| removed.position).collect()
    }
}
