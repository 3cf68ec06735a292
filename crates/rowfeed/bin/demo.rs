//! Demonstration of the two result-view modes over a scripted query.
//!
//! Run with: `cargo run -p rowfeed --bin demo`

use rowfeed::{ExecutionContext, FeedConfig, ScriptedExecutor, SqlExecutor};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== rowfeed demo ===\n");

    let config = FeedConfig::default()
        .with_buffer_capacity(64)
        .with_feed_interval(Duration::from_millis(5));
    let batch = config.batch_hint;

    let mut executor = ScriptedExecutor::new(config);
    let ctx = ExecutionContext::default();
    executor.start(&ctx)?;

    for table in executor.list_tables(&ctx)? {
        let schema = executor.table_schema(&ctx, &table)?;
        let columns: Vec<&str> = schema.columns().iter().map(|c| c.name.as_str()).collect();
        println!("table {table}: {}", columns.join(", "));
    }

    let result = executor.execute_query(&ctx, "SELECT * FROM test.ProfileChangeStream")?;

    // Grid view: re-read the first page while the stream advances. The same
    // range may show different rows once the buffer starts evicting.
    println!("\n--- grid view (repeatable paging) ---");
    for refresh in 1..=3 {
        std::thread::sleep(Duration::from_millis(50));
        let page = executor.retrieve_query_result(0, 9);
        println!("refresh {refresh}: {} buffered, page 1:", executor.row_count());
        for row in &page {
            println!("  {}", row.join(" | "));
        }
    }

    // Log view: consume whatever arrived since the last refresh; consumed
    // rows are gone from the buffer.
    println!("\n--- log view (destructive tailing) ---");
    for refresh in 1..=3 {
        std::thread::sleep(Duration::from_millis(50));
        let available = executor.row_count();
        let rows = if available == 0 {
            Vec::new()
        } else {
            executor.consume_query_result(0, available.min(batch) - 1)
        };
        println!("refresh {refresh}: consumed {} rows", rows.len());
        for row in &rows {
            println!("  {}", row.join(" | "));
        }
    }

    executor.stop_execution(result.exec_id)?;
    executor.stop(&ctx)?;

    println!("\n=== done ===");
    Ok(())
}
