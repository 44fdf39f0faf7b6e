use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqError {
    // Indexing
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("slice step must be non-zero")]
    ZeroStep,

    // Terminal ops
    #[error("{0} of an empty sequence")]
    Empty(&'static str),

    // Parallel execution
    #[error("worker pool failure")]
    Pool(String),
}

impl SeqError {
    /// Whether the caller's input (index, step) caused this error, as opposed
    /// to a runtime failure inside the worker pool. Callers use this to decide
    /// between "fix your arguments" and "retry / report" handling.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::ZeroStep | Self::Empty(_)
        )
    }
}
