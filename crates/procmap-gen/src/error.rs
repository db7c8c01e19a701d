/// Errors returned by the generation entry points.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Dimensions or configuration values out of range. Nothing was written.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The progress callback asked to stop. Tiles written so far remain.
    #[error("generation cancelled at {progress}%")]
    Cancelled { progress: u32 },
}
