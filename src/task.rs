use std::fmt;

/// Caller-assigned identity of a task. Unique within a queue.
pub type TaskId = u64;

/// Ordering key of a task. Higher values are served first.
pub type Priority = i64;

/// A unit of work stored in a [`MaxHeapPQ`](crate::priority_queue::MaxHeapPQ).
///
/// The priority can only be changed through the queue's `increase_key`/`decrease_key` while the
/// task is enqueued; there is no public setter, so a stored task can never be re-prioritized
/// behind the queue's back.
#[derive(Debug, Clone, PartialEq)]
pub struct Task<M = ()> {
    id: TaskId,
    priority: Priority,
    arrival_time: Option<f64>,
    deadline: Option<f64>,
    meta: Option<M>,
}

impl Task {
    /// Creates a task without scheduling metadata.
    pub fn new(id: TaskId, priority: Priority) -> Self {
        Task {
            id,
            priority,
            arrival_time: None,
            deadline: None,
            meta: None,
        }
    }
}

impl<M> Task<M> {
    /// Attaches opaque caller data, changing the task's metadata type.
    pub fn with_meta<N>(self, meta: N) -> Task<N> {
        Task {
            id: self.id,
            priority: self.priority,
            arrival_time: self.arrival_time,
            deadline: self.deadline,
            meta: Some(meta),
        }
    }

    pub fn with_arrival_time(mut self, arrival_time: f64) -> Self {
        self.arrival_time = Some(arrival_time);
        self
    }

    pub fn with_deadline(mut self, deadline: f64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[inline(always)]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[inline(always)]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn arrival_time(&self) -> Option<f64> {
        self.arrival_time
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn meta(&self) -> Option<&M> {
        self.meta.as_ref()
    }

    /// Takes the metadata out of the task, leaving `None`.
    pub fn take_meta(&mut self) -> Option<M> {
        self.meta.take()
    }

    /// Only the queue may call this, and it must restore the heap property afterwards.
    #[inline(always)]
    pub(crate) fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }
}

impl<M> fmt::Display for Task<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task(id={}, priority={})", self.id, self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_metadata() {
        let task = Task::new(7, 42);
        assert_eq!(task.id(), 7);
        assert_eq!(task.priority(), 42);
        assert_eq!(task.arrival_time(), None);
        assert_eq!(task.deadline(), None);
        assert_eq!(task.meta(), None);
    }

    #[test]
    fn test_builders() {
        let mut task = Task::new(1, -5)
            .with_arrival_time(0.5)
            .with_deadline(2.0)
            .with_meta("backup");

        assert_eq!(task.id(), 1);
        assert_eq!(task.priority(), -5);
        assert_eq!(task.arrival_time(), Some(0.5));
        assert_eq!(task.deadline(), Some(2.0));
        assert_eq!(task.meta(), Some(&"backup"));
        assert_eq!(task.take_meta(), Some("backup"));
        assert_eq!(task.meta(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Task::new(3, 15).to_string(), "Task(id=3, priority=15)");
        let task = Task::new(4, -1).with_meta(vec![1, 2, 3]);
        assert_eq!(format!("{}", task), "Task(id=4, priority=-1)");
    }
}
