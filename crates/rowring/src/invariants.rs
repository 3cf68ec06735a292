//! Debug assertion macros for the queue window invariants.
//!
//! Only active in debug builds (`debug_assert!`), so there is zero overhead
//! in release builds. Every mutating operation re-checks these before
//! releasing the lock.

/// Assert that the retained count never exceeds capacity.
///
/// **Invariant**: `0 <= size <= capacity`
///
/// Used in: `add()`, `consume()` after updating `size`
macro_rules! debug_assert_bounded_size {
    ($size:expr, $capacity:expr) => {
        debug_assert!(
            $size <= $capacity,
            "size {} exceeds capacity {}",
            $size,
            $capacity
        )
    };
}

/// Assert that the head slot index stays inside the backing store.
///
/// **Invariant**: `0 <= head < capacity`
///
/// Used in: `add()`, `consume()`, `clear()` after updating `head`
macro_rules! debug_assert_head_in_range {
    ($head:expr, $capacity:expr) => {
        debug_assert!(
            $head < $capacity,
            "head {} outside backing store of {} slots",
            $head,
            $capacity
        )
    };
}

/// Assert that the window is dense: slot `(head + i) % capacity` is occupied
/// for every `i in 0..size` and vacant everywhere else.
///
/// **Invariant**: `storage[s].is_some() <=> (s - head) mod capacity < size`
///
/// Used in: `add()`, `consume()`, `clear()` before releasing the lock
macro_rules! debug_assert_dense_window {
    ($state:expr) => {
        if cfg!(debug_assertions) {
            let capacity = $state.storage.len();
            for slot in 0..capacity {
                let offset = (slot + capacity - $state.head) % capacity;
                let in_window = offset < $state.size;
                debug_assert_eq!(
                    $state.storage[slot].is_some(),
                    in_window,
                    "slot {} violates dense window (head: {}, size: {})",
                    slot,
                    $state.head,
                    $state.size
                );
            }
        }
    };
}

pub(crate) use debug_assert_bounded_size;
pub(crate) use debug_assert_dense_window;
pub(crate) use debug_assert_head_in_range;
