//! In-process scripted executor, for local testing and demos.
//!
//! Stands in for a real streaming engine while the shell is developed
//! against the boundary: `execute_query` spawns a feeder thread that pushes
//! generated rows into the shared buffer until the execution is stopped.

use crate::executor::{ExecutionContext, QueryResult, Row, SqlExecutor};
use crate::{FeedConfig, FeedError, TableSchema, TableSchemaBuilder};
use rand::Rng;
use rowring::RandomAccessQueue;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

/// The one table the scripted executor serves.
const SCRIPTED_TABLE: &str = "test.ProfileChangeStream";

const NAMES: &[&str] = &["ava", "ben", "chen", "divya", "emil", "fatima"];
const COMPANIES: &[&str] = &["acme", "globex", "initech", "hooli", "stark"];

fn scripted_schema() -> TableSchema {
    TableSchemaBuilder::default()
        .append_column("Key", "String")
        .append_column("Name", "String")
        .append_column("NewCompany", "String")
        .append_column("OldCompany", "String")
        .append_column("ProfileChangeTimestamp", "String")
        .build()
}

fn sample_row(rng: &mut impl Rng, seq: u64) -> Row {
    vec![
        seq.to_string(),
        NAMES[rng.gen_range(0..NAMES.len())].to_string(),
        COMPANIES[rng.gen_range(0..COMPANIES.len())].to_string(),
        COMPANIES[rng.gen_range(0..COMPANIES.len())].to_string(),
        format!("t+{seq}"),
    ]
}

struct Execution {
    stop: Arc<AtomicBool>,
    /// Feeder thread; returns the number of rows it delivered.
    feeder: Option<JoinHandle<u64>>,
}

/// [`SqlExecutor`] fed by background threads generating scripted rows.
///
/// All executions share one result buffer, the way a shell session shares
/// one result view; `retrieve_query_result` and `consume_query_result` read
/// that buffer with the paging and tailing contracts of
/// [`rowring::RandomAccessQueue`].
pub struct ScriptedExecutor {
    output: Arc<RandomAccessQueue<Row>>,
    config: FeedConfig,
    started: bool,
    next_exec_id: u64,
    executions: HashMap<u64, Execution>,
}

impl ScriptedExecutor {
    /// Creates an executor with the given feed configuration.
    pub fn new(config: FeedConfig) -> Self {
        Self {
            output: Arc::new(RandomAccessQueue::with_capacity(config.buffer_capacity)),
            config,
            started: false,
            next_exec_id: 0,
            executions: HashMap::new(),
        }
    }

    /// Returns the feed configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    fn halt_execution(exec_id: u64, mut execution: Execution) -> Result<(), FeedError> {
        execution.stop.store(true, Ordering::Release);
        if let Some(feeder) = execution.feeder.take() {
            let rows = feeder
                .join()
                .map_err(|_| FeedError::ExecutionFailed("feeder thread panicked".into()))?;
            info!(exec_id, rows, "query execution stopped");
        }
        Ok(())
    }
}

impl SqlExecutor for ScriptedExecutor {
    fn start(&mut self, _ctx: &ExecutionContext) -> Result<(), FeedError> {
        self.started = true;
        debug!("scripted executor started");
        Ok(())
    }

    fn stop(&mut self, _ctx: &ExecutionContext) -> Result<(), FeedError> {
        for (exec_id, execution) in self.executions.drain() {
            Self::halt_execution(exec_id, execution)?;
        }
        self.output.clear();
        self.started = false;
        debug!("scripted executor stopped");
        Ok(())
    }

    fn list_tables(&self, _ctx: &ExecutionContext) -> Result<Vec<String>, FeedError> {
        Ok(vec![SCRIPTED_TABLE.to_string()])
    }

    fn table_schema(&self, _ctx: &ExecutionContext, table: &str) -> Result<TableSchema, FeedError> {
        if table == SCRIPTED_TABLE {
            Ok(scripted_schema())
        } else {
            Err(FeedError::NoSuchTable {
                table: table.to_string(),
            })
        }
    }

    fn execute_query(
        &mut self,
        _ctx: &ExecutionContext,
        statement: &str,
    ) -> Result<QueryResult, FeedError> {
        if !self.started {
            return Err(FeedError::NotStarted);
        }

        let exec_id = self.next_exec_id;
        self.next_exec_id += 1;

        let stop = Arc::new(AtomicBool::new(false));
        let output = Arc::clone(&self.output);
        let flag = Arc::clone(&stop);
        let interval = self.config.feed_interval;

        let feeder = thread::Builder::new()
            .name(format!("feeder-{exec_id}"))
            .spawn(move || {
                let mut rng = rand::thread_rng();
                let mut seq = 0u64;
                while !flag.load(Ordering::Acquire) {
                    output.add(sample_row(&mut rng, seq));
                    seq += 1;
                    thread::sleep(interval);
                }
                seq
            })
            .map_err(|e| FeedError::ExecutionFailed(format!("failed to spawn feeder: {e}")))?;

        self.executions.insert(
            exec_id,
            Execution {
                stop,
                feeder: Some(feeder),
            },
        );

        info!(exec_id, statement, "query execution started");
        Ok(QueryResult {
            exec_id,
            schema: scripted_schema(),
        })
    }

    fn row_count(&self) -> usize {
        self.output.len()
    }

    fn retrieve_query_result(&self, start: usize, end: usize) -> Vec<Row> {
        self.output.range(start, end)
    }

    fn consume_query_result(&self, start: usize, end: usize) -> Vec<Row> {
        self.output.consume(start, end)
    }

    fn stop_execution(&mut self, exec_id: u64) -> Result<(), FeedError> {
        let execution = self
            .executions
            .remove(&exec_id)
            .ok_or(FeedError::NoSuchQuery { exec_id })?;
        Self::halt_execution(exec_id, execution)
    }
}

impl Drop for ScriptedExecutor {
    fn drop(&mut self) {
        // Feeder threads must not outlive the executor.
        for (exec_id, execution) in self.executions.drain() {
            let _ = Self::halt_execution(exec_id, execution);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rows_match_schema_width() {
        let mut rng = rand::thread_rng();
        let schema = scripted_schema();
        for seq in 0..10 {
            assert_eq!(sample_row(&mut rng, seq).len(), schema.column_count());
        }
    }

    #[test]
    fn rows_carry_sequence_keys() {
        let mut rng = rand::thread_rng();
        let row = sample_row(&mut rng, 42);
        assert_eq!(row[0], "42");
    }
}
