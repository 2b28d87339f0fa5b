use std::vec::Vec;

use crate::entry_arena::{EntryArena, EntryId};

/// Binary min-heap of entry ids.
/// Order is taken from arena by `(priority, sequence)`,
/// so equal priorities are popped in insertion order.
///
/// There is no removal of arbitrary items:
/// removed entries stay inside until they reach the top.
#[derive(Clone, Debug)]
pub(crate) struct LazyBinaryHeap {
    data: Vec<EntryId>,
}

impl LazyBinaryHeap {
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Puts entry in queue
    /// Time complexity - O(log n) swaps
    #[inline(always)]
    pub(crate) fn push<TPriority: Ord>(&mut self, id: EntryId, arena: &EntryArena<TPriority>) {
        self.data.push(id);
        self.heapify_up(self.data.len() - 1, arena);
    }

    /// Removes entry with the smallest `(priority, sequence)`
    /// Time complexity - O(log n) swaps
    pub(crate) fn pop<TPriority: Ord>(&mut self, arena: &EntryArena<TPriority>) -> Option<EntryId> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap_items(0, last);
        let result = self.data.pop();
        if !self.data.is_empty() {
            self.heapify_down(0, arena);
        }
        result
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<EntryId> {
        self.data.first().copied()
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    /// Takes all items out, leaving heap empty.
    /// Items are in heap order, not sorted.
    #[inline(always)]
    pub(crate) fn take_items(&mut self) -> Vec<EntryId> {
        std::mem::take(&mut self.data)
    }

    /// Builds heap from arbitrary ordered items.
    /// Time complexity - O(n)
    pub(crate) fn from_items<TPriority: Ord>(
        items: Vec<EntryId>,
        arena: &EntryArena<TPriority>,
    ) -> Self {
        let heapify_start = std::cmp::min(items.len() / 2 + 2, items.len());
        let mut res = Self { data: items };
        for pos in (0..heapify_start).rev() {
            res.heapify_down(pos, arena);
        }
        res
    }

    #[inline(always)]
    fn goes_before<TPriority: Ord>(
        &self,
        pos1: usize,
        pos2: usize,
        arena: &EntryArena<TPriority>,
    ) -> bool {
        arena.get(self.data[pos1]).sort_key() < arena.get(self.data[pos2]).sort_key()
    }

    fn heapify_up<TPriority: Ord>(&mut self, position: usize, arena: &EntryArena<TPriority>) {
        debug_assert!(position < self.data.len(), "Out of index in heapify_up");
        let mut position = position;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.goes_before(position, parent_pos, arena) {
                self.swap_items(parent_pos, position);
                position = parent_pos;
            } else {
                break;
            }
        }
    }

    fn heapify_down<TPriority: Ord>(&mut self, position: usize, arena: &EntryArena<TPriority>) {
        debug_assert!(position < self.data.len(), "Out of index in heapify_down");
        let mut position = position;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                if child2 >= self.data.len() || self.goes_before(child1, child2, arena) {
                    child1
                } else {
                    child2
                }
            };

            if self.goes_before(min_child_idx, position, arena) {
                self.swap_items(position, min_child_idx);
                position = min_child_idx;
            } else {
                break;
            }
        }
    }

    #[inline(always)]
    fn swap_items(&mut self, pos1: usize, pos2: usize) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
    }
}


#[cfg(test)]
mod tests {
    use super::test_helpers::is_valid_heap;
    use super::*;
    use crate::entry_arena::{Entry, Owner};

    fn fill(items: &[i32]) -> (LazyBinaryHeap, EntryArena<i32>) {
        let mut arena = EntryArena::with_capacity(items.len());
        let mut heap = LazyBinaryHeap::with_capacity(items.len());
        for (sequence, &priority) in items.iter().enumerate() {
            let id = arena.insert(Entry {
                priority,
                sequence: sequence as u64,
                owner: Owner::Removed,
            });
            heap.push(id, &arena);
        }
        (heap, arena)
    }

    #[test]
    fn test_heap_fill() {
        let items = [
            70, 50, 0, 1, 2, 4, 6, 7, 9, 72, 4, 4, 87, 78, 72, 6, 7, 9, 2, -50, -72, -50, -42, -1,
            -3, -13,
        ];
        let mut minimum = i32::MAX;
        let mut arena = EntryArena::new();
        let mut heap = LazyBinaryHeap::new();
        assert!(heap.peek().is_none());
        assert!(is_valid_heap(&heap, &arena), "Heap state is invalid");
        for (sequence, &x) in items.iter().enumerate() {
            if x < minimum {
                minimum = x;
            }
            let id = arena.insert(Entry {
                priority: x,
                sequence: sequence as u64,
                owner: Owner::Removed,
            });
            heap.push(id, &arena);
            assert!(
                is_valid_heap(&heap, &arena),
                "Heap state is invalid after pushing {}",
                x
            );
            let top = heap.peek().unwrap();
            assert_eq!(minimum, arena.get(top).priority);
        }
    }

    #[test]
    fn test_pop() {
        let items = [
            -16, 5, 11, -1, -34, -42, -5, -6, 25, -35, 11, 35, -2, 40, 42, 40, -45, -48, 48, -38,
            -28, -33, -31, 34, -18, 25, 16, -33, -11, -6, -35, -38, 35, -41, -38, 31, -38, -23, 26,
            44, 38, 11, -49, 30, 7, 13, 12, -4, -11, -24, -49, 26, 42, 46, -25, -22, -6, -42, 28,
            45, -47, 8, 8, 21, 49, -12, -5, -33, -37, 24, -3, -26, 6, -13, 16, -40, -14, -39, -26,
            12, -44, 47, 45, -41, -22, -11, 20, 43, -44, 24, 47, 40, 43, 9, 19, 12, -17, 30, -36,
            -50, 24, -2, 1, 1, 5, -19, 21, -38, 47, 34, -14, 12, -30, 24, -2, -32, -10, 40, 34, 2,
        ];

        let (mut heap, arena) = fill(&items);
        assert!(is_valid_heap(&heap, &arena), "Heap is invalid before pops");

        let mut sorted_items: Vec<(i32, usize)> =
            items.iter().cloned().enumerate().map(|(i, x)| (x, i)).collect();
        sorted_items.sort_unstable();
        for &(x, sequence) in sorted_items.iter() {
            let id = heap.pop(&arena).unwrap();
            assert_eq!(arena.get(id).priority, x);
            // Equal priorities leave in insertion order
            assert_eq!(arena.get(id).sequence, sequence as u64);
            assert!(is_valid_heap(&heap, &arena), "Heap is invalid after {}", x);
        }

        assert_eq!(heap.pop(&arena), None);
    }

    #[test]
    fn test_equal_priorities_fifo() {
        let (mut heap, arena) = fill(&[3, 3, 3, 3, 3, 3, 3]);
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop(&arena))
            .map(|id| arena.get(id).sequence)
            .collect();
        assert_eq!(order, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_items_test() {
        let priorities = [
            16i32, 16, 5, 20, 10, 12, 10, 8, 12, 2, 20, -1, -18, 5, -16, 1, 7, 3, 17, -20, -4, 3,
            -7, -5, -8, 19, -19, -16, 3, 4, 17, 13, 3, 11, -9, 0, -10, -2, 16, 19, -12, -4, 19, 7,
            16, -19, -9, -17, 6, -16, -3, 11, -14, -15, -10, 13, 11, -14, 18, -8, -9, -4, 5, -4,
            17, 6, -16, -5, 12, 12, -3, 8, 5, -4, 7, 10, 7, -11, 18, -16, 18, 4, -15, -4, -13, 7,
        ];
        let mut arena = EntryArena::new();
        let items: Vec<EntryId> = priorities
            .iter()
            .enumerate()
            .map(|(sequence, &priority)| {
                arena.insert(Entry {
                    priority,
                    sequence: sequence as u64,
                    owner: Owner::Removed,
                })
            })
            .collect();
        let heap = LazyBinaryHeap::from_items(items, &arena);
        assert!(is_valid_heap(&heap, &arena), "Must be valid heap");
        assert_eq!(heap.len(), priorities.len());
        for &id in heap.data.iter() {
            assert_eq!(priorities[id.as_usize()], arena.get(id).priority);
        }
    }

    #[test]
    fn test_take_items_and_clear() {
        let (mut heap, arena) = fill(&[0, 1, 2, 3, 4]);
        assert!(!heap.is_empty(), "Heap must be non empty");
        let items = heap.take_items();
        assert_eq!(items.len(), 5);
        assert!(heap.is_empty(), "Heap must be empty");
        let mut heap = LazyBinaryHeap::from_items(items, &arena);
        assert_eq!(heap.peek(), Some(EntryId::new(0)));
        heap.clear();
        assert_eq!(heap.pop(&arena), None);
    }
}
