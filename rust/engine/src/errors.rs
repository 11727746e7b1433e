use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No player at seat {index}")]
    UnknownPlayer { index: usize },
    #[error("{name} already holds the maximum of {limit} cards")]
    HandLimitReached { name: String, limit: usize },
    #[error("Round is not in the playing phase")]
    RoundNotInPlay,
    #[error("Players can only be seated during setup")]
    NotInSetup,
}
