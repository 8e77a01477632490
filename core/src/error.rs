use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid shape does not match the solution shape")]
    ShapeMismatch,
    #[error("Malformed puzzle data: {0}")]
    MalformedPayload(&'static str),
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
