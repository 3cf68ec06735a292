//! Error types for feed operations.

use thiserror::Error;

/// Errors surfaced across the executor boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The executor was used before `start` (or after `stop`).
    #[error("executor not started")]
    NotStarted,

    /// No execution with the given id is known.
    #[error("no such query execution: {exec_id}")]
    NoSuchQuery {
        /// The execution id that was requested.
        exec_id: u64,
    },

    /// No table with the given name is known.
    #[error("no such table: {table}")]
    NoSuchTable {
        /// The table name that was requested.
        table: String,
    },

    /// The execution itself failed.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

impl FeedError {
    /// Returns `true` if the session can continue after this error.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSuchQuery { .. } | Self::NoSuchTable { .. })
    }

    /// Returns `true` if this error means the executor is unusable until
    /// restarted.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NotStarted)
    }
}
