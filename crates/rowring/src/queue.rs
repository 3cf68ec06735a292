use crate::invariants::{
    debug_assert_bounded_size, debug_assert_dense_window, debug_assert_head_in_range,
};
use crate::QueueError;
use std::sync::{Mutex, MutexGuard, PoisonError};

// =============================================================================
// LOGICAL WINDOW & MODULAR MAPPING
// =============================================================================
//
// The queue retains up to `capacity` elements in a fixed backing store. The
// retained elements form a logical window `[0, size)` mapped onto backing
// slots by modular arithmetic:
//
//     slot(i) = (head + i) % capacity
//
// Logical index 0 is always the oldest retained element. Logical indices are
// NOT arrival sequence numbers: they shift every time the window advances,
// which happens on eviction (`add` at full capacity) and on `consume`.
//
// ## Synchronization
//
// The producer (query execution thread) calls `add`; the readers (UI thread)
// call `range`/`consume`/`clear` on a refresh cadence. Nothing above this
// type serializes the two sides, so a single mutex around the whole
// `(head, size, storage)` triple is the synchronization boundary. No
// operation blocks waiting for data: short or empty ranges return fewer
// elements, and `add` evicts instead of waiting for space. Lock hold time is
// O(range length) for ranged operations and O(1) for `add` and `get`.
//
// ## Clamping asymmetry
//
// Single-index `get` fails with `OutOfRange` past the window; ranged reads
// clamp to `[start, min(end, size - 1)]` and return what is there. Paging
// UIs re-request windows computed from a size that may already be stale, so
// the ranged contract must never fail on an out-of-date window.
//
// =============================================================================

/// Bounded random-access consumable ring buffer.
///
/// Retains the `capacity` most recently added elements. Supports repeatable
/// ranged reads ([`range`](Self::range)) for paging, destructive ranged reads
/// ([`consume`](Self::consume)) for tailing, and strict FIFO eviction when
/// the producer outruns the readers.
pub struct RandomAccessQueue<T> {
    /// Fixed at construction; never changes for the lifetime of the queue.
    capacity: usize,
    state: Mutex<QueueState<T>>,
}

struct QueueState<T> {
    /// Backing store. `Box<[Option<T>]>` rather than `Vec`: the size is fixed
    /// at construction and never grows, and vacated slots must drop their
    /// element eagerly (hence `Option`, not `MaybeUninit`).
    storage: Box<[Option<T>]>,
    /// Backing-store index of the logically oldest retained element.
    head: usize,
    /// Number of retained elements, `0 <= size <= capacity`.
    size: usize,
}

impl<T> QueueState<T> {
    /// Inclusive upper bound of a clamped range, or `None` when empty.
    fn clamp_upper(&self, end: usize) -> Option<usize> {
        if self.size == 0 {
            None
        } else {
            Some(end.min(self.size - 1))
        }
    }
}

impl<T> RandomAccessQueue<T> {
    /// Creates a queue retaining at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");

        // Fixed-size store as a boxed slice; allocated once, never resized.
        let mut storage = Vec::with_capacity(capacity);
        storage.resize_with(capacity, || None);
        let storage = storage.into_boxed_slice();

        Self {
            capacity,
            state: Mutex::new(QueueState {
                storage,
                head: 0,
                size: 0,
            }),
        }
    }

    /// Acquires the window lock.
    ///
    /// A poisoned lock still guards a consistent window: every mutation
    /// restores the invariants before returning, so the state behind a
    /// poisoned mutex is as valid as any other and is simply reused.
    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Appends an element; at full capacity, evicts the oldest.
    ///
    /// Never blocks and never fails. Eviction is strict FIFO: the element at
    /// logical index 0 is overwritten and the window advances, so indices a
    /// reader computed before this call may now refer to different elements.
    pub fn add(&self, item: T) {
        let mut st = self.lock();
        let head = st.head;
        let size = st.size;

        if size == self.capacity {
            // Full: overwrite the oldest slot and advance the window.
            st.storage[head] = Some(item);
            st.head = (head + 1) % self.capacity;
        } else {
            let pos = (head + size) % self.capacity;
            st.storage[pos] = Some(item);
            st.size = size + 1;
        }

        debug_assert_bounded_size!(st.size, self.capacity);
        debug_assert_head_in_range!(st.head, self.capacity);
        debug_assert_dense_window!(st);
    }

    // ---------------------------------------------------------------------
    // READER API
    // ---------------------------------------------------------------------

    /// Returns the element at logical index `index`.
    ///
    /// # Errors
    ///
    /// [`QueueError::OutOfRange`] when `index >= len()`. This is the only
    /// failing operation on the queue; callers that cannot check `len()`
    /// first should prefer [`range`](Self::range), which clamps instead.
    pub fn get(&self, index: usize) -> Result<T, QueueError>
    where
        T: Clone,
    {
        let st = self.lock();
        if index >= st.size {
            return Err(QueueError::OutOfRange {
                index,
                size: st.size,
            });
        }

        let slot = (st.head + index) % self.capacity;
        match st.storage[slot] {
            Some(ref item) => Ok(item.clone()),
            // A vacant slot inside the window would mean a mutation path
            // broke the dense-window invariant; report the index unreadable
            // rather than panicking under the lock.
            None => Err(QueueError::OutOfRange {
                index,
                size: st.size,
            }),
        }
    }

    /// Returns the elements in the closed logical range `[start, end]`,
    /// clamped to the retained window.
    ///
    /// The bounds need not be in range: the effective window is
    /// `[start, min(end, len() - 1)]`, and an empty effective window (empty
    /// queue, or `start` past the end) yields an empty vec, never an error.
    /// The returned vec is a snapshot; later mutation of the queue does not
    /// affect it. Safe to call repeatedly with overlapping ranges while the
    /// stream advances underneath.
    pub fn range(&self, start: usize, end: usize) -> Vec<T>
    where
        T: Clone,
    {
        let st = self.lock();
        let Some(upper) = st.clamp_upper(end) else {
            return Vec::new();
        };
        if start > upper {
            return Vec::new();
        }

        (start..=upper)
            .filter_map(|i| st.storage[(st.head + i) % self.capacity].clone())
            .collect()
    }

    /// Destructively reads the closed logical range `[start, end]`, clamped
    /// the same way as [`range`](Self::range).
    ///
    /// Returns the elements at `[start, min(end, len() - 1)]` and then
    /// discards **every** element up to and including that upper bound — not
    /// just the returned ones. A caller passing `start > 0` loses the
    /// elements at `0..start` without ever seeing them: `consume` advances
    /// the tail boundary to `end`, it does not preserve unread elements
    /// before `start`. Callers who need those must [`range`](Self::range)
    /// them first.
    ///
    /// On an empty queue this is a no-op returning an empty vec.
    pub fn consume(&self, start: usize, end: usize) -> Vec<T> {
        let mut st = self.lock();
        let Some(upper) = st.clamp_upper(end) else {
            return Vec::new();
        };

        // Vacate every slot up to `upper`; keep only [start, upper] for the
        // caller, drop the rest in place.
        let head = st.head;
        let mut returned = Vec::with_capacity(upper.saturating_sub(start) + 1);
        for i in 0..=upper {
            let slot = (head + i) % self.capacity;
            let item = st.storage[slot].take();
            if i >= start {
                if let Some(item) = item {
                    returned.push(item);
                }
            }
        }

        st.head = (head + upper + 1) % self.capacity;
        st.size -= upper + 1;

        debug_assert_bounded_size!(st.size, self.capacity);
        debug_assert_head_in_range!(st.head, self.capacity);
        debug_assert_dense_window!(st);

        returned
    }

    /// Discards all retained elements and resets the window to the origin.
    pub fn clear(&self) {
        let mut st = self.lock();
        for slot in st.storage.iter_mut() {
            *slot = None;
        }
        st.head = 0;
        st.size = 0;

        debug_assert_dense_window!(st);
    }

    // ---------------------------------------------------------------------
    // INTROSPECTION
    // ---------------------------------------------------------------------

    /// Returns the number of currently retained elements.
    pub fn len(&self) -> usize {
        self.lock().size
    }

    /// Returns true if no elements are retained.
    pub fn is_empty(&self) -> bool {
        self.lock().size == 0
    }

    /// Returns the backing-store index of the oldest retained element.
    ///
    /// Exposed for tests and diagnostics; readers address elements by
    /// logical index and never need this.
    pub fn head(&self) -> usize {
        self.lock().head
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
