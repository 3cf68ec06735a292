//! Error types for queue operations.

use thiserror::Error;

/// Errors raised by [`RandomAccessQueue`](crate::RandomAccessQueue).
///
/// Only single-index access can fail. Ranged reads clamp to the retained
/// window and return fewer (possibly zero) elements instead of failing, so
/// UI code driving them off a stale window never has to handle an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A single-index read past the end of the retained window.
    #[error("index {index} out of range (size: {size})")]
    OutOfRange {
        /// The logical index that was requested.
        index: usize,
        /// The number of elements retained at the time of the call.
        size: usize,
    },
}
