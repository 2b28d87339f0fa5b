//! This is min-priority queue of tasks that supports changing priority and early removal.
//!
//! It uses IndexMap and own implementation of binary heap to achieve this.
//!
//! Each task has associated *priority*.
//! Tasks must be unique, and hashable; priorities must implement Ord trait.
//!
//! Popping returns task with the smallest priority,
//! tasks with equal priorities are returned in the order they were added.
//! Adding existing task again changes its priority.
//! Also it is possible to remove task before it is popped.
//!
//! Heap is never searched for the changed or removed task:
//! its entry is only marked as removed and skipped when it reaches the top of the heap.
//!
//! Add task and pop have ***O(log n)*** time complexity;
//! remove task, lookup of priority by task are ***O(1)***.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra] for small directed graph.
//! Sometimes shorter path to a node in the frontier is found
//! so the priority of it needs to be updated with new value.
//!
//! This example shows how to change priority in [`PriorityQueue`] when needed.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`PriorityQueue`]: struct.PriorityQueue.html
//!
//! ```
//! use lazy_priority_queue::PriorityQueue;
//! use std::collections::HashMap;
//!
//! // Edges as (from, to, weight)
//! fn shortest_paths(edges: &[(u32, u32, u32)], start: u32) -> HashMap<u32, u32> {
//!     let mut settled = HashMap::new();
//!     let mut frontier = PriorityQueue::with_name("frontier");
//!     frontier.add_task(start, 0);
//!     while let Some((node, distance)) = frontier.pop() {
//!         settled.insert(node, distance);
//!         for &(_, to, weight) in edges.iter().filter(|&&(from, _, _)| from == node) {
//!             if settled.contains_key(&to) {
//!                 continue;
//!             }
//!             let candidate = distance + weight;
//!             match frontier.get_priority(&to) {
//!                 Some(&known) if known <= candidate => { /* Have found worse path. */ }
//!                 // Adds new node or replaces priority of known one
//!                 _ => frontier.add_task(to, candidate),
//!             }
//!         }
//!     }
//!     settled
//! }
//!
//! let edges = [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)];
//! let distances = shortest_paths(&edges, 0);
//! assert_eq!(distances[&0], 0);
//! assert_eq!(distances[&1], 3);
//! assert_eq!(distances[&2], 1);
//! assert_eq!(distances[&3], 4);
//! ```
//!

mod entry_arena;
mod error;
mod lazy_binary_heap;
mod mediator;
mod priority_queue;

pub use crate::error::{EmptyQueueError, TaskNotFoundError};
pub use crate::priority_queue::{
    PopIter, PriorityQueue, PriorityQueueBorrowIter, PriorityQueueIterator,
};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
