use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParsurfError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Degenerate geometry: {0}")]
    Degenerate(String),
}

pub type Result<T> = std::result::Result<T, ParsurfError>;
