use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
