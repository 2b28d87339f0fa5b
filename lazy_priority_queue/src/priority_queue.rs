use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

use tracing::{debug, trace};

use crate::entry_arena::{Entry, EntryArena, EntryId, Owner};
use crate::error::{EmptyQueueError, TaskNotFoundError};
use crate::lazy_binary_heap::LazyBinaryHeap;
use crate::mediator::{Mediator, MediatorEntry, SwapRemoved};

/// A min-priority queue of tasks that supports changing priority and removal by task.
///
/// Smaller `TPriority` values are popped first.
/// Tasks with equal priority are popped in the order they were added (or last re-added).
///
/// Priority changes and removals don't touch the heap:
/// the old entry is marked as removed and stays inside
/// until it reaches the top of the heap, where it is discarded.
/// Use [`debris_len`] to see how many such entries wait there and [`compact`] to drop them at once.
///
/// It is logic error if task values changes somehow while in queue.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// [`debris_len`]: struct.PriorityQueue.html#method.debris_len
/// [`compact`]: struct.PriorityQueue.html#method.compact
///
/// # Examples
///
/// ## Main example
/// ```
/// use lazy_priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
///
/// queue.add_task("Fourth", 4);
/// queue.add_task("Second", 2);
/// queue.add_task("Third", 3);
/// queue.add_task("Also second", 2);
/// queue.add_task("First", 1);
///
/// assert_eq!(queue.len(), 5);
/// assert_eq!(queue.peek(), Some((&"First", &1)));
///
/// // Re-adding task changes its priority
/// queue.add_task("Fourth", 0);
/// assert_eq!(queue.len(), 5);
///
/// assert_eq!(queue.remove_task("Third"), Ok("Third"));
///
/// // Tasks are popped in ascending priority,
/// // equal priorities in insertion order
/// let order: Vec<_> = queue.into_iter().collect();
/// assert_eq!(order, ["Fourth", "First", "Second", "Also second"]);
/// ```
///
/// ## Errors
/// ```
/// use lazy_priority_queue::{EmptyQueueError, PriorityQueue, TaskNotFoundError};
///
/// let mut queue: PriorityQueue<&str, i32> = PriorityQueue::with_name("jobs");
/// assert_eq!(queue.pop_task(), Err(EmptyQueueError));
/// assert_eq!(queue.remove_task("missing"), Err(TaskNotFoundError));
/// ```
///
/// ## Floating point priorities
/// Priorities must be totally ordered, so floats need a wrapper.
/// ```
/// use lazy_priority_queue::PriorityQueue;
/// use std::cmp::Ordering;
///
/// #[derive(Debug, PartialEq)]
/// struct Deadline(f64);
///
/// impl Eq for Deadline {}
///
/// impl PartialOrd for Deadline {
///     fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
///         Some(self.cmp(other))
///     }
/// }
///
/// impl Ord for Deadline {
///     fn cmp(&self, other: &Self) -> Ordering {
///         self.0.total_cmp(&other.0)
///     }
/// }
///
/// let mut queue = PriorityQueue::new();
/// queue.add_task("later", Deadline(2.5));
/// queue.add_task("sooner", Deadline(0.5));
/// assert_eq!(queue.pop(), Some(("sooner", Deadline(0.5))));
/// assert_eq!(queue.pop(), Some(("later", Deadline(2.5))));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<TTask, TPriority, S = RandomState>
where
    TTask: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    name: String,
    heap: LazyBinaryHeap,
    entries: EntryArena<TPriority>,
    task_to_entry: Mediator<TTask, S>,
    next_sequence: u64,
}

impl<TTask: Hash + Eq, TPriority: Ord> PriorityQueue<TTask, TPriority, RandomState> {
    /// Creates an empty queue
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.add_task("Task", 4);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::default())
    }

    /// Creates an empty queue with diagnostic name.
    /// Name has no effect on ordering, it is shown in `Debug` output and log events.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let queue: PriorityQueue<u32, u32> = PriorityQueue::with_name("downloads");
    /// assert_eq!(queue.name(), "downloads");
    /// ```
    #[inline]
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut queue = Self::new();
        queue.set_name(name);
        queue
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` tasks without reallocation.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::with_capacity(10);
    /// queue.add_task("Task", 4);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> PriorityQueue<TTask, TPriority, S> {
    /// Creates an empty queue with specific Hasher
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = PriorityQueue::with_hasher(RandomState::default());
    /// queue.add_task("Task", 4);
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` tasks without reallocation.
    /// Also useful when Hasher cannot be defaulted.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = PriorityQueue::with_capacity_and_hasher(10, RandomState::default());
    /// queue.add_task("Task", 4);
    /// ```
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            name: String::new(),
            heap: LazyBinaryHeap::with_capacity(capacity),
            entries: EntryArena::with_capacity(capacity),
            task_to_entry: Mediator::with_capacity_and_hasher(capacity, hasher),
            next_sequence: 0,
        }
    }

    /// Diagnostic name of the queue, empty by default.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes diagnostic name of the queue.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Reserves space for at least `additional` new tasks.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.entries.reserve(additional);
        self.task_to_entry.reserve(additional);
    }

    /// Adds new task to queue if it is missing or replaces its priority if it exists.
    /// In second case doesn't replace stored task value.
    ///
    /// Replacing priority leaves the old entry in heap marked as removed
    /// and gives the task a fresh place in insertion order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.add_task("First", 5);
    /// queue.add_task("Second", 7);
    /// assert_eq!(queue.peek(), Some((&"First", &5)));
    /// queue.add_task("First", 10);
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.peek(), Some((&"Second", &7)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    /// where n also counts removed entries still kept in heap.
    pub fn add_task(&mut self, task: TTask, priority: TPriority) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let entries = &mut self.entries;
        let name = &self.name;

        let id = match self.task_to_entry.entry(task) {
            MediatorEntry::Vacant(internal_entry) => {
                let id = entries.insert(Entry {
                    priority,
                    sequence,
                    owner: Owner::Live(internal_entry.index()),
                });
                internal_entry.insert(id);
                trace!(queue = %name, sequence, "added task");
                id
            }
            MediatorEntry::Occupied(mut internal_entry) => {
                let id = entries.insert(Entry {
                    priority,
                    sequence,
                    owner: Owner::Live(internal_entry.index()),
                });
                let superseded = internal_entry.replace(id);
                let superseded = entries.get_mut(superseded);
                superseded.owner = Owner::Removed;
                trace!(
                    queue = %name,
                    sequence,
                    superseded = superseded.sequence,
                    "updated task priority"
                );
                id
            }
        };
        self.heap.push(id, &self.entries);
    }

    /// Marks task as removed and returns stored task value.
    /// Returns [`TaskNotFoundError`] if queue doesn't contain such task.
    ///
    /// [`TaskNotFoundError`]: struct.TaskNotFoundError.html
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::{PriorityQueue, TaskNotFoundError};
    /// let mut queue: PriorityQueue<String, i32> = PriorityQueue::new();
    /// queue.add_task("Task".to_string(), 1);
    /// queue.add_task("Other".to_string(), 2);
    /// assert_eq!(queue.remove_task("Task"), Ok("Task".to_string()));
    /// assert_eq!(queue.remove_task("Task"), Err(TaskNotFoundError));
    /// assert_eq!(queue.len(), 1);
    /// // Removed entry stays in heap until popped
    /// assert_eq!(queue.debris_len(), 1);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)*** on average, heap is not touched.
    pub fn remove_task<Q>(&mut self, task: &Q) -> Result<TTask, TaskNotFoundError>
    where
        TTask: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self
            .task_to_entry
            .swap_remove(task)
            .ok_or(TaskNotFoundError)?;
        let entry = self.entries.get_mut(removed.entry_id);
        entry.owner = Owner::Removed;
        trace!(queue = %self.name, sequence = entry.sequence, "removed task");
        Ok(self.finish_swap_remove(removed))
    }

    /// Removes and returns task with the minimal priority.
    /// Returns [`EmptyQueueError`] if queue doesn't contain any task.
    ///
    /// [`EmptyQueueError`]: struct.EmptyQueueError.html
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::{EmptyQueueError, PriorityQueue};
    /// let mut queue: PriorityQueue<i32, i32> = (0..3).map(|x| (x, -x)).collect();
    /// assert_eq!(queue.pop_task(), Ok(2));
    /// assert_eq!(queue.pop_task(), Ok(1));
    /// assert_eq!(queue.pop_task(), Ok(0));
    /// assert_eq!(queue.pop_task(), Err(EmptyQueueError));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)*** for every removed entry discarded on the way plus the popped one.
    /// Every removed entry is discarded only once.
    #[inline]
    pub fn pop_task(&mut self) -> Result<TTask, EmptyQueueError> {
        self.pop().map(|(task, _)| task).ok_or(EmptyQueueError)
    }

    /// Removes and returns task with the minimal priority together with the priority.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32, i32> = (0..3).map(|x| (x, x)).collect();
    /// assert_eq!(queue.pop(), Some((0, 0)));
    /// assert_eq!(queue.pop(), Some((1, 1)));
    /// assert_eq!(queue.pop(), Some((2, 2)));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Same as [`pop_task`](struct.PriorityQueue.html#method.pop_task).
    pub fn pop(&mut self) -> Option<(TTask, TPriority)> {
        self.discard_removed_on_top();
        let id = self.heap.pop(&self.entries)?;
        let entry = self.entries.free(id);
        let index = match entry.owner {
            Owner::Live(index) => index,
            Owner::Removed => unreachable!("Removed entries were discarded from top"),
        };
        let removed = self.task_to_entry.swap_remove_index(index);
        debug_assert_eq!(removed.entry_id, id);
        let task = self.finish_swap_remove(removed);
        trace!(queue = %self.name, sequence = entry.sequence, "popped task");
        Some((task, entry.priority))
    }

    /// Get reference to the pair with the minimal priority.
    /// Needs mutable access because removed entries on top of heap are discarded first.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// assert_eq!(queue.peek(), Some((&0, &0)));
    /// queue.remove_task(&0).unwrap();
    /// assert_eq!(queue.peek(), Some((&1, &1)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** if there is no removed entry on top of heap.
    pub fn peek(&mut self) -> Option<(&TTask, &TPriority)> {
        self.discard_removed_on_top();
        let entry = self.entries.get(self.heap.peek()?);
        match entry.owner {
            Owner::Live(index) => {
                let (task, _) = self.task_to_entry.get_index(index);
                Some((task, &entry.priority))
            }
            Owner::Removed => unreachable!("Removed entries were discarded from top"),
        }
    }

    /// Get reference to the priority by task.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<&str, i32> = PriorityQueue::new();
    /// queue.add_task("to be replaced", 10);
    /// assert_eq!(queue.get_priority("to be replaced"), Some(&10));
    /// queue.add_task("to be replaced", 88);
    /// assert_eq!(queue.get_priority("to be replaced"), Some(&88));
    /// assert_eq!(queue.get_priority("missing"), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)*** on average
    pub fn get_priority<Q>(&self, task: &Q) -> Option<&TPriority>
    where
        TTask: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.task_to_entry.get(task)?;
        Some(&self.entries.get(id).priority)
    }

    /// Returns true if task is in queue and wasn't removed.
    #[inline]
    pub fn contains_task<Q>(&self, task: &Q) -> bool
    where
        TTask: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.task_to_entry.get(task).is_some()
    }

    /// Get the number of tasks in queue.
    /// Removed entries still kept in heap are not counted.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// queue.add_task(3, 10);
    /// assert_eq!(queue.len(), 5);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert!(self.task_to_entry.len() <= self.heap.len());
        self.task_to_entry.len()
    }

    /// Returns true if queue has no tasks.
    ///
    /// ```
    /// let mut queue = lazy_priority_queue::PriorityQueue::new();
    /// assert!(queue.is_empty());
    /// queue.add_task(0, 5);
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert!(!self.heap.is_empty() || self.task_to_entry.is_empty());
        self.task_to_entry.is_empty()
    }

    /// Number of removed or superseded entries still kept in heap.
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// queue.add_task(3, 10);
    /// queue.remove_task(&4).unwrap();
    /// assert_eq!(queue.debris_len(), 2);
    /// queue.compact();
    /// assert_eq!(queue.debris_len(), 0);
    /// ```
    #[inline]
    pub fn debris_len(&self) -> usize {
        debug_assert_eq!(self.heap.len(), self.entries.len());
        self.heap.len() - self.task_to_entry.len()
    }

    /// Make the queue empty.
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// assert!(!queue.is_empty());
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    pub fn clear(&mut self) {
        self.heap.clear();
        self.entries.clear();
        self.task_to_entry.clear();
        debug!(queue = %self.name, "cleared queue");
    }

    /// Drops all removed entries from heap at once and rebuilds it.
    /// Doesn't change order of popping.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)*** where n counts removed entries too.
    pub fn compact(&mut self) {
        let mut items = self.heap.take_items();
        let before = items.len();
        let entries = &mut self.entries;
        items.retain(|&id| {
            let is_live = entries.get(id).is_live();
            if !is_live {
                entries.free(id);
            }
            is_live
        });
        let discarded = before - items.len();
        self.heap = LazyBinaryHeap::from_items(items, &self.entries);
        debug!(
            queue = %self.name,
            discarded,
            kept = self.heap.len(),
            "compacted heap"
        );
    }

    /// Create readonly borrowing iterator over tasks and their priorities.
    /// Order of items is unspecified.
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// use std::collections::HashMap;
    /// let queue: PriorityQueue<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// let mut entries = HashMap::new();
    /// for (&task, &priority) in queue.iter() {
    ///     entries.insert(task, priority);
    /// }
    /// let second_map: HashMap<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// assert_eq!(entries, second_map);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> PriorityQueueBorrowIter<TTask, TPriority> {
        PriorityQueueBorrowIter {
            tasks: self.task_to_entry.iter(),
            entries: &self.entries,
        }
    }

    /// Create iterator that pops tasks in priority order.
    ///
    /// Iteration stops without error when queue becomes empty.
    /// Tasks not yet returned stay in queue if iterator is dropped early.
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<&str, i32> =
    ///     [("b", 2), ("a", 1), ("c", 3)].iter().cloned().collect();
    /// let popped: Vec<_> = queue.pop_iter().take(2).collect();
    /// assert_eq!(popped, ["a", "b"]);
    /// assert_eq!(queue.len(), 1);
    /// assert_eq!(queue.pop_iter().collect::<Vec<_>>(), ["c"]);
    /// assert_eq!(queue.pop_iter().next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Overall complexity of iteration is ***O(n log n)***
    #[inline]
    pub fn pop_iter(&mut self) -> PopIter<TTask, TPriority, S> {
        PopIter { queue: self }
    }

    // Drops removed entries until top of heap is live or heap is empty
    fn discard_removed_on_top(&mut self) {
        while let Some(id) = self.heap.peek() {
            if self.entries.get(id).is_live() {
                break;
            }
            self.heap.pop(&self.entries);
            let entry = self.entries.free(id);
            trace!(queue = %self.name, sequence = entry.sequence, "discarded removed entry");
        }
    }

    // Tells entry of the task moved by swap removal about its new position
    fn finish_swap_remove(&mut self, removed: SwapRemoved<TTask>) -> TTask {
        if let Some((index, moved_id)) = removed.moved {
            self.entries.get_mut(moved_id).owner = Owner::Live(index);
        }
        removed.task
    }
}

impl<TTask: Hash + Eq + Debug, TPriority: Ord + Debug, S: BuildHasher> Debug
    for PriorityQueue<TTask, TPriority, S>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}[", self.name)?;
        for entry in self.iter() {
            write!(f, "{:?}", entry)?;
        }
        write!(f, "]")
    }
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher + Default> Default
    for PriorityQueue<TTask, TPriority, S>
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> Extend<(TTask, TPriority)>
    for PriorityQueue<TTask, TPriority, S>
{
    /// Adds every pair using [`add_task`] so repeated tasks get the last priority.
    ///
    /// [`add_task`]: struct.PriorityQueue.html#method.add_task
    fn extend<T: IntoIterator<Item = (TTask, TPriority)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (task, priority) in iter {
            self.add_task(task, priority);
        }
    }
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher + Default> FromIterator<(TTask, TPriority)>
    for PriorityQueue<TTask, TPriority, S>
{
    /// Allows building queue from iterator using `collect()`.
    /// At result it will be valid queue with unique tasks.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<&str, i32> =
    /// [("first", 0), ("second", 1), ("third", 2), ("first", 5)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.pop(), Some(("second", 1)));
    /// assert_eq!(queue.pop(), Some(("third", 2)));
    /// assert_eq!(queue.pop(), Some(("first", 5)));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** in average.
    fn from_iter<T: IntoIterator<Item = (TTask, TPriority)>>(iter: T) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> IntoIterator
    for PriorityQueue<TTask, TPriority, S>
{
    type Item = TTask;
    type IntoIter = PriorityQueueIterator<TTask, TPriority, S>;

    /// Make iterator that return tasks in ascending priority order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use lazy_priority_queue::PriorityQueue;
    /// let queue: PriorityQueue<&str, i32> =
    ///     [("first", 0), ("second", 1), ("third", 2)]
    ///                             .iter().cloned().collect();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some("first"));
    /// assert_eq!(iterator.next(), Some("second"));
    /// assert_eq!(iterator.next(), Some("third"));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns tasks in ascending priority order
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct PriorityQueueIterator<TTask, TPriority, S = RandomState>
where
    TTask: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    queue: PriorityQueue<TTask, TPriority, S>,
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> Iterator
    for PriorityQueueIterator<TTask, TPriority, S>
{
    type Item = TTask;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_task().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> ExactSizeIterator
    for PriorityQueueIterator<TTask, TPriority, S>
{
}

impl<TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> FusedIterator
    for PriorityQueueIterator<TTask, TPriority, S>
{
}

/// This is borrowing iterator that pops tasks in ascending priority order.
///
/// It is created by [`pop_iter`] method of [`PriorityQueue`].
///
/// [`PriorityQueue`]: struct.PriorityQueue.html
/// [`pop_iter`]: struct.PriorityQueue.html#method.pop_iter
pub struct PopIter<'a, TTask, TPriority, S = RandomState>
where
    TTask: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    queue: &'a mut PriorityQueue<TTask, TPriority, S>,
}

impl<'a, TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> Iterator
    for PopIter<'a, TTask, TPriority, S>
{
    type Item = TTask;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_task().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<'a, TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> ExactSizeIterator
    for PopIter<'a, TTask, TPriority, S>
{
}

// Queue is borrowed mutably, so nothing can refill it after exhaustion
impl<'a, TTask: Hash + Eq, TPriority: Ord, S: BuildHasher> FusedIterator
    for PopIter<'a, TTask, TPriority, S>
{
}

/// This is unordered borrowing iterator over queue.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct PriorityQueueBorrowIter<'a, TTask, TPriority> {
    tasks: indexmap::map::Iter<'a, TTask, EntryId>,
    entries: &'a EntryArena<TPriority>,
}

impl<'a, TTask: 'a, TPriority: 'a> Iterator for PriorityQueueBorrowIter<'a, TTask, TPriority> {
    type Item = (&'a TTask, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        self.tasks
            .next()
            .map(|(task, &id)| (task, &entries.get(id).priority))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tasks.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.tasks.count()
    }
}
