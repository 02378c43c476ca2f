use super::{Position, RemovedTile};

/// Signals for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEngineEvent {
    GameStarted {
        seed: u64,
        tiles_remaining: usize,
    },
    SelectionShown(Position),
    SelectionHidden,
    TilesRemoved(Vec<Position>),
    TilesRestored(Vec<RemovedTile>),
    HistoryChanged {
        history_length: usize,
    },
    Solved,
    NoPairsFound,
}
