use thiserror::Error;

/// Error type for sequence generator construction.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The requested sequence length cannot produce any output.
    #[error("Length of sequence must be at least 1, got {0}")]
    InvalidLength(usize),
}
