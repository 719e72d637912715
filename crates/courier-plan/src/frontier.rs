//! A min-priority frontier with stable FIFO tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Entry in the frontier: priority key plus insertion sequence.
///
/// `BinaryHeap` is a max-heap, so the orderings are reversed: the entry
/// with the lowest key wins, and among equal keys the one inserted first.
/// The sequence number makes pop order fully deterministic, so UCS and
/// A* tie-breaking never depends on heap internals.
struct Entry<K, T> {
    key: K,
    seq: u64,
    item: T,
}

impl<K: Ord, T> PartialEq for Entry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<K: Ord, T> Eq for Entry<K, T> {}

impl<K: Ord, T> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both fields: min key first, then earliest insertion.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K: Ord, T> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over key `K` with stable insertion order among
/// equal keys.
pub(crate) struct Frontier<K, T> {
    heap: BinaryHeap<Entry<K, T>>,
    next_seq: u64,
}

impl<K: Ord, T> Frontier<K, T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, key: K, item: T) {
        self.heap.push(Entry {
            key,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_key_order() {
        let mut f = Frontier::new();
        f.push(3u64, "c");
        f.push(1, "a");
        f.push(2, "b");
        assert_eq!(f.pop(), Some("a"));
        assert_eq!(f.pop(), Some("b"));
        assert_eq!(f.pop(), Some("c"));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_keys_pop_in_insertion_order() {
        let mut f = Frontier::new();
        for label in ["first", "second", "third"] {
            f.push(7u64, label);
        }
        assert_eq!(f.pop(), Some("first"));
        assert_eq!(f.pop(), Some("second"));
        assert_eq!(f.pop(), Some("third"));
    }

    #[test]
    fn tuple_keys_order_lexicographically() {
        // A*'s (f, h) key: equal f breaks on lower h.
        let mut f = Frontier::new();
        f.push((10u64, 4u32), "far");
        f.push((10, 2), "near");
        f.push((9, 9), "cheapest");
        assert_eq!(f.pop(), Some("cheapest"));
        assert_eq!(f.pop(), Some("near"));
        assert_eq!(f.pop(), Some("far"));
    }

    #[test]
    fn is_empty_tracks_contents() {
        let mut f: Frontier<u64, ()> = Frontier::new();
        assert!(f.is_empty());
        f.push(1, ());
        assert!(!f.is_empty());
        f.pop();
        assert!(f.is_empty());
    }
}
