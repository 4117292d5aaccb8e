/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by engine operations.
///
/// All of these are local, synchronous, and recoverable: the registry is
/// left untouched by any rejected operation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input rejected before any mutation (empty or duplicate tag name,
    /// malformed sheet JSON, empty stage snapshot).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No tag with the given name exists in any pool.
    #[error("tag not found: {0}")]
    NotFound(String),

    /// The operation is illegal for the tag's current state or kind.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A driver-level precondition was not met (e.g. rolling with no move
    /// selected).
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}
