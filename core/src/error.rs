use crate::types::Player;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Shape mismatch in {matrix}: expected 2x2, got {rows}x{cols}")]
    ShapeMismatch {
        matrix: String,
        rows:   usize,
        cols:   usize,
    },

    #[error("Strategy index {index} out of range for {player:?} ({count} strategies)")]
    PlayerIndexOutOfRange {
        player: Player,
        index:  usize,
        count:  usize,
    },

    #[error("Scenario '{name}' not found")]
    UnknownScenario { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GameResult<T> = Result<T, GameError>;
