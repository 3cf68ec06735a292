//! Property-based tests for the queue window invariants.
//!
//! Each property drives the queue with an arbitrary operation sequence and
//! checks it against a straightforward model (a `VecDeque` capped at
//! capacity), plus the structural invariants on `(head, size)`.

use proptest::prelude::*;
use rowring::RandomAccessQueue;
use std::collections::VecDeque;

/// Operations the property tests can apply.
#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Range(usize, usize),
    Consume(usize, usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u64>().prop_map(Op::Add),
        2 => (0usize..16, 0usize..16).prop_map(|(s, e)| Op::Range(s, e)),
        1 => (0usize..16, 0usize..16).prop_map(|(s, e)| Op::Consume(s, e)),
        1 => Just(Op::Clear),
    ]
}

/// Applies one operation to the reference model, mirroring the queue's
/// clamping and eviction rules exactly.
fn apply_model(model: &mut VecDeque<u64>, capacity: usize, op: &Op) -> Vec<u64> {
    match *op {
        Op::Add(v) => {
            if model.len() == capacity {
                model.pop_front();
            }
            model.push_back(v);
            Vec::new()
        }
        Op::Range(start, end) => {
            if model.is_empty() {
                return Vec::new();
            }
            let upper = end.min(model.len() - 1);
            if start > upper {
                return Vec::new();
            }
            model.range(start..=upper).copied().collect()
        }
        Op::Consume(start, end) => {
            if model.is_empty() {
                return Vec::new();
            }
            let upper = end.min(model.len() - 1);
            let returned = if start > upper {
                Vec::new()
            } else {
                model.range(start..=upper).copied().collect()
            };
            // Everything up to the clamped upper bound is discarded.
            model.drain(0..=upper);
            returned
        }
        Op::Clear => {
            model.clear();
            Vec::new()
        }
    }
}

proptest! {
    /// After any operation sequence, size and head stay in bounds.
    #[test]
    fn prop_bounded_window(
        capacity in 1usize..12,
        ops in prop::collection::vec(op_strategy(), 1..80),
    ) {
        let queue = RandomAccessQueue::with_capacity(capacity);

        for op in &ops {
            match *op {
                Op::Add(v) => queue.add(v),
                Op::Range(s, e) => { queue.range(s, e); }
                Op::Consume(s, e) => { queue.consume(s, e); }
                Op::Clear => queue.clear(),
            }

            prop_assert!(queue.len() <= capacity,
                "len {} exceeds capacity {}", queue.len(), capacity);
            prop_assert!(queue.head() < capacity,
                "head {} outside backing store of {} slots", queue.head(), capacity);
        }
    }

    /// The queue agrees with a capped VecDeque model on every return value
    /// and on the retained window after every operation.
    #[test]
    fn prop_matches_model(
        capacity in 1usize..12,
        ops in prop::collection::vec(op_strategy(), 1..80),
    ) {
        let queue = RandomAccessQueue::with_capacity(capacity);
        let mut model: VecDeque<u64> = VecDeque::new();

        for op in &ops {
            let expected = apply_model(&mut model, capacity, op);
            let actual = match *op {
                Op::Add(v) => { queue.add(v); Vec::new() }
                Op::Range(s, e) => queue.range(s, e),
                Op::Consume(s, e) => queue.consume(s, e),
                Op::Clear => { queue.clear(); Vec::new() }
            };

            prop_assert_eq!(&actual, &expected, "return mismatch on {:?}", op);
            prop_assert_eq!(queue.len(), model.len());

            let window = queue.range(0, capacity);
            let model_window: Vec<u64> = model.iter().copied().collect();
            prop_assert_eq!(window, model_window, "window mismatch after {:?}", op);
        }
    }

    /// Arrival order is preserved modulo eviction: after n adds, logical
    /// index i holds the (n - retained + i)-th added element.
    #[test]
    fn prop_arrival_order(
        capacity in 1usize..12,
        n in 1usize..40,
    ) {
        let queue = RandomAccessQueue::with_capacity(capacity);
        for v in 0..n as u64 {
            queue.add(v);
        }

        let retained = n.min(capacity);
        prop_assert_eq!(queue.len(), retained);
        prop_assert_eq!(queue.head(), n.saturating_sub(capacity) % capacity);

        let evicted = (n - retained) as u64;
        for i in 0..retained {
            prop_assert_eq!(queue.get(i).unwrap(), evicted + i as u64);
        }
    }

    /// Ranged reads are idempotent without intervening mutation.
    #[test]
    fn prop_range_idempotent(
        capacity in 1usize..12,
        n in 0usize..20,
        start in 0usize..16,
        end in 0usize..16,
    ) {
        let queue = RandomAccessQueue::with_capacity(capacity);
        for v in 0..n as u64 {
            queue.add(v);
        }

        let first = queue.range(start, end);
        let second = queue.range(start, end);
        prop_assert_eq!(first, second);
        prop_assert_eq!(queue.len(), n.min(capacity));
    }

    /// After consume(start, end), everything up to the clamped upper bound
    /// is gone.
    #[test]
    fn prop_consume_empties_prefix(
        capacity in 1usize..12,
        n in 1usize..20,
        start in 0usize..16,
        end in 0usize..16,
    ) {
        let queue = RandomAccessQueue::with_capacity(capacity);
        for v in 0..n as u64 {
            queue.add(v);
        }

        let size_before = queue.len();
        queue.consume(start, end);

        let upper = end.min(size_before - 1);
        prop_assert_eq!(queue.len(), size_before - (upper + 1));

        // Re-reading the consumed prefix against the new window yields only
        // elements that arrived after the old upper bound.
        let survivors = queue.range(0, upper);
        for v in survivors {
            prop_assert!(v as usize > upper + (n - size_before));
        }
    }
}
