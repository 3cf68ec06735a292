//! The executor boundary consumed by the shell.

use crate::{FeedError, TableSchema};
use std::collections::HashMap;

/// A display-formatted result row, one cell per column.
pub type Row = Vec<String>;

/// Handle for a started query execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Non-negative execution id; unique per executor session.
    pub exec_id: u64,
    /// Schema of the rows this execution produces.
    pub schema: TableSchema,
}

/// String-keyed settings handed to executor calls.
///
/// Each call receives a context; executors must not store it, since the
/// shell may hand a different one on the next call.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    settings: HashMap<String, String>,
}

impl ExecutionContext {
    /// Sets a setting, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.settings.insert(key.to_string(), value.to_string());
    }

    /// Returns a setting, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}

/// The narrow boundary between the shell and a streaming query engine.
///
/// An executor must support two ways of supplying result data:
///
/// 1. **Paging** ([`retrieve_query_result`](Self::retrieve_query_result)):
///    the UI shows a small window of a potentially unbounded stream and may
///    ask for the same row range over and over, e.g. when the user flips
///    between pages while the stream advances underneath. The executor keeps
///    the retrieved rows.
///
/// 2. **Tailing** ([`consume_query_result`](Self::consume_query_result)):
///    the UI keeps asking for new rows and never looks back. Once consumed,
///    rows are dropped; everything before the requested end is deleted.
pub trait SqlExecutor {
    /// Readies the executor. Must be called before any other method.
    fn start(&mut self, ctx: &ExecutionContext) -> Result<(), FeedError>;

    /// Stops all executions and releases buffered rows. No further calls
    /// will be made until the executor is started again.
    fn stop(&mut self, ctx: &ExecutionContext) -> Result<(), FeedError>;

    /// Lists the tables visible to queries.
    fn list_tables(&self, ctx: &ExecutionContext) -> Result<Vec<String>, FeedError>;

    /// Returns the schema of a table.
    fn table_schema(&self, ctx: &ExecutionContext, table: &str) -> Result<TableSchema, FeedError>;

    /// Starts a streaming query. Rows arrive asynchronously after this
    /// returns and are pulled via the two result methods below.
    fn execute_query(
        &mut self,
        ctx: &ExecutionContext,
        statement: &str,
    ) -> Result<QueryResult, FeedError>;

    /// Number of rows currently available for reading.
    fn row_count(&self) -> usize;

    /// Repeatable paging read of rows `[start, end]` (both inclusive,
    /// clamped to what is buffered). The rows stay available afterwards.
    fn retrieve_query_result(&self, start: usize, end: usize) -> Vec<Row>;

    /// Destructive tailing read of rows `[start, end]` (both inclusive,
    /// clamped). All buffered rows up to and including `end` are deleted,
    /// whether or not they were returned.
    fn consume_query_result(&self, start: usize, end: usize) -> Vec<Row>;

    /// Stops one execution. The producer stops delivering rows; already
    /// buffered rows remain readable.
    fn stop_execution(&mut self, exec_id: u64) -> Result<(), FeedError>;
}
