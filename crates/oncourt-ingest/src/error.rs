use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// A required top-level field is absent or unusable. Fatal for the game:
    /// callers should skip it rather than produce partial output.
    #[error("structural error: {0}")]
    Structural(String),
    #[error(transparent)]
    Model(#[from] oncourt_model::ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
