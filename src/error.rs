use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("catalog holds {catalog} tiles but the layout has {cells} tile cells")]
    SizeMismatch { catalog: usize, cells: usize },
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
