//! Executor Boundary for an Interactive Streaming SQL Shell
//!
//! This crate sits between a streaming query engine and a console UI. The
//! engine streams result rows from a background thread; the UI pulls them on
//! a refresh cadence in one of two modes:
//!
//! - **Grid view**: pages through a bounded window of recent rows with
//!   repeatable reads ([`SqlExecutor::retrieve_query_result`]). The same
//!   range can be requested over and over while the stream advances.
//! - **Log view**: tails the stream destructively
//!   ([`SqlExecutor::consume_query_result`]); once shown, rows are dropped
//!   and the buffer only retains what the view has not scrolled past.
//!
//! Both modes are backed by a shared [`rowring::RandomAccessQueue`], which
//! evicts the oldest rows when the engine outruns the UI rather than
//! applying backpressure.
//!
//! The actual engine (planning, execution, serialization, table discovery)
//! lives behind the [`SqlExecutor`] trait. [`ScriptedExecutor`] is an
//! in-process stand-in that feeds generated rows from a background thread,
//! used for local testing and the demo binary.
//!
//! # Example
//!
//! ```
//! use rowfeed::{ExecutionContext, FeedConfig, ScriptedExecutor, SqlExecutor};
//! use std::time::Duration;
//!
//! let config = FeedConfig::default()
//!     .with_buffer_capacity(64)
//!     .with_feed_interval(Duration::from_millis(1));
//! let mut executor = ScriptedExecutor::new(config);
//! let ctx = ExecutionContext::default();
//!
//! executor.start(&ctx).unwrap();
//! let result = executor.execute_query(&ctx, "SELECT * FROM test.Stream").unwrap();
//!
//! // ... UI pulls via retrieve_query_result / consume_query_result ...
//!
//! executor.stop_execution(result.exec_id).unwrap();
//! executor.stop(&ctx).unwrap();
//! ```

mod config;
mod error;
mod executor;
mod schema;
mod scripted;

pub use config::FeedConfig;
pub use error::FeedError;
pub use executor::{ExecutionContext, QueryResult, Row, SqlExecutor};
pub use schema::{ColumnDef, TableSchema, TableSchemaBuilder};
pub use scripted::ScriptedExecutor;
