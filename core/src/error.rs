use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position is outside the board")]
    OutOfBounds,
    #[error("Board rows must be non-empty and of equal length")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
