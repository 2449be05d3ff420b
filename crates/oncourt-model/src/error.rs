use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid game id: {0:?}")]
    InvalidGameId(String),
    #[error("lineup invariant violated: {0}")]
    LineupInvariant(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
