use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
