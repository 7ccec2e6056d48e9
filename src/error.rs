use thiserror::Error;

/// Errors surfaced by chain assembly.
///
/// Recoverable conditions (filtering would empty the candidate set, no
/// start candidate exists) are handled inside the core and reported
/// through [`crate::Observer`] events instead of error values.
#[derive(Error, Debug)]
pub enum ChainError {
    /// Merge was asked to fold an empty fragment sequence; head and
    /// tail would be undefined, so this is never papered over with a
    /// default fragment.
    #[error("cannot merge an empty fragment sequence")]
    EmptyInput,

    /// Loading or saving fragment data failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, ChainError>;
