use super::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEngineCommand {
    Activate(Position),
    Undo,
    ShowHint,
    NewGame(Option<u64>), // seed
}
