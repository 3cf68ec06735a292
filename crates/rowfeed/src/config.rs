//! Configuration for feed behavior.

use std::time::Duration;

/// Configuration for the result feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Capacity of the result row buffer.
    ///
    /// When a query produces rows faster than the UI pulls them, the oldest
    /// buffered rows are evicted. A grid view can page at most this far
    /// back into the stream.
    ///
    /// Default: 5000
    pub buffer_capacity: usize,

    /// Interval between rows produced by the scripted executor's feeder
    /// thread.
    ///
    /// Default: 10ms
    pub feed_interval: Duration,

    /// Target number of rows the UI should pull per refresh.
    ///
    /// A hint only; ranged reads clamp to whatever is buffered.
    ///
    /// Default: 64
    pub batch_hint: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 5000,
            feed_interval: Duration::from_millis(10),
            batch_hint: 64,
        }
    }
}

impl FeedConfig {
    /// Creates a low-latency configuration: small buffer, fast feed.
    pub fn low_latency() -> Self {
        Self {
            buffer_capacity: 512,
            feed_interval: Duration::from_millis(1),
            batch_hint: 16,
        }
    }

    /// Creates a high-throughput configuration: deep buffer, large batches.
    pub fn high_throughput() -> Self {
        Self {
            buffer_capacity: 20_000,
            feed_interval: Duration::from_millis(1),
            batch_hint: 256,
        }
    }

    /// Sets the buffer capacity.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Sets the feed interval.
    pub fn with_feed_interval(mut self, interval: Duration) -> Self {
        self.feed_interval = interval;
        self
    }

    /// Sets the batch hint.
    pub fn with_batch_hint(mut self, hint: usize) -> Self {
        self.batch_hint = hint;
        self
    }
}
