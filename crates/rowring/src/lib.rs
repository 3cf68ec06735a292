//! rowring - Bounded Random-Access Consumable Buffer
//!
//! A fixed-capacity queue that decouples a streaming row producer (a query
//! execution thread) from the readers of an interactive result view (a UI
//! refresh loop). The producer appends at full speed and never blocks; when
//! the buffer is full the oldest row is silently evicted. Readers see the
//! retained window through two access patterns:
//!
//! - **Paging reads** ([`RandomAccessQueue::range`]): repeatable, possibly
//!   overlapping ranged reads for a grid view that re-renders pages while the
//!   stream keeps advancing.
//! - **Tailing reads** ([`RandomAccessQueue::consume`]): destructive ranged
//!   reads for a log view that only ever moves forward and lets the buffer
//!   drop everything it has scrolled past.
//!
//! # Key Properties
//!
//! - FIFO eviction under overflow; `add` is O(1) and never fails
//! - Single mutex around the whole window; every operation is atomic with
//!   respect to every other
//! - Fixed backing store allocated once at construction, no reallocation
//!
//! # Example
//!
//! ```
//! use rowring::RandomAccessQueue;
//!
//! let queue = RandomAccessQueue::with_capacity(5);
//! for i in 0..8u64 {
//!     queue.add(i);
//! }
//! // The five most recent survive; logical index 0 is the oldest retained.
//! assert_eq!(queue.range(0, 4), vec![3, 4, 5, 6, 7]);
//!
//! // Tailing: returns [6, 7] and discards everything up to logical index 4.
//! assert_eq!(queue.consume(3, 4), vec![6, 7]);
//! assert!(queue.is_empty());
//! ```

mod error;
mod invariants;
mod queue;

pub use error::QueueError;
pub use queue::RandomAccessQueue;
