use super::{GameEngineCommand, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clickable {
    Tile(Position),
    UndoButton,
    SearchButton,
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    LeftClick(Clickable),
    KeyPressed { key: char, meta: bool },
}

impl InputEvent {
    pub fn to_command(&self) -> Option<GameEngineCommand> {
        match self {
            InputEvent::LeftClick(Clickable::Tile(position)) => {
                Some(GameEngineCommand::Activate(*position))
            }
            InputEvent::LeftClick(Clickable::UndoButton) => Some(GameEngineCommand::Undo),
            InputEvent::LeftClick(Clickable::SearchButton) => Some(GameEngineCommand::ShowHint),
            InputEvent::LeftClick(Clickable::Surface) => None,
            InputEvent::KeyPressed { key, meta: true } if key.eq_ignore_ascii_case(&'z') => {
                Some(GameEngineCommand::Undo)
            }
            InputEvent::KeyPressed { .. } => None,
        }
    }
}
