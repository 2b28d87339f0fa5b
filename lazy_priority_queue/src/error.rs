use thiserror::Error;

/// This is error type for [`pop_task`] method of [`PriorityQueue`].
/// It means that queue doesn't contain any live task.
///
/// [`PriorityQueue`]: struct.PriorityQueue.html
/// [`pop_task`]: struct.PriorityQueue.html#method.pop_task
#[derive(Error, Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Default)]
#[error("pop from an empty priority queue")]
pub struct EmptyQueueError;

/// This is error type for [`remove_task`] method of [`PriorityQueue`].
/// It means that queue doesn't contain such task.
///
/// [`PriorityQueue`]: struct.PriorityQueue.html
/// [`remove_task`]: struct.PriorityQueue.html#method.remove_task
#[derive(Error, Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Default)]
#[error("task not found in priority queue")]
pub struct TaskNotFoundError;
