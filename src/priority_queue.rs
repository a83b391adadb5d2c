use crate::heap::{self, HeapSlots};
use crate::task::{Priority, Task, TaskId};
use log::{debug, trace};
use std::{collections::HashMap, error::Error, fmt};

/// A max-priority queue of [`Task`]s that allows updating priorities by task id.
///
/// Tasks are owned by the queue from [`insert`](Self::insert) until
/// [`extract_max`](Self::extract_max) hands them back. Not thread-safe: callers sharing a queue
/// across threads must serialize access themselves, e.g. with a `Mutex<MaxHeapPQ>`.
#[derive(Debug, Clone)]
pub struct MaxHeapPQ<M = ()> {
    slots: Slots<M>,
}

/// The heap array and the id→position index. Only [`HeapSlots::swap`] and the queue's own
/// push/pop may touch either, so the two never disagree once a public call returns.
#[derive(Debug, Clone)]
struct Slots<M> {
    /// The array representation of the heap.
    tasks: Vec<Task<M>>,
    /// Mapping from task id to its index in `tasks`.
    pos_by_id: HashMap<TaskId, usize>,
}

impl<M> HeapSlots for Slots<M> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline(always)]
    fn is_above(&self, a: usize, b: usize) -> bool {
        self.tasks[a].priority() > self.tasks[b].priority()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.tasks.swap(a, b);
        self.set_pos(a);
        self.set_pos(b);
    }
}

impl<M> Slots<M> {
    /// Points the index entry of the task at `idx` back to `idx`.
    #[inline(always)]
    fn set_pos(&mut self, idx: usize) {
        let id = self.tasks[idx].id();
        self.pos_by_id.insert(id, idx);
    }
}

impl<M> Default for MaxHeapPQ<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MaxHeapPQ<M> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with room for `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        MaxHeapPQ {
            slots: Slots {
                tasks: Vec::with_capacity(capacity),
                pos_by_id: HashMap::with_capacity(capacity),
            },
        }
    }

    /// Builds a queue from `tasks` in O(n).
    ///
    /// Fails on the first task whose id was already seen. Only that task is returned in the
    /// error; the tasks taken from `tasks` before it are dropped.
    pub fn try_from_tasks(
        tasks: impl IntoIterator<Item = Task<M>>,
    ) -> Result<Self, InsertError<M>> {
        let tasks = tasks.into_iter();
        let mut pq = Self::with_capacity(tasks.size_hint().0);

        for task in tasks {
            if pq.contains(task.id()) {
                debug!("Rejected duplicate task id {} during bulk build", task.id());
                return Err(InsertError::DuplicateId(task));
            }
            pq.slots.pos_by_id.insert(task.id(), pq.slots.tasks.len());
            pq.slots.tasks.push(task);
        }

        heap::build_max_heap(&mut pq.slots);
        Ok(pq)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.tasks.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.tasks.is_empty()
    }

    /// Checks whether a task with the given id is enqueued.
    pub fn contains(&self, id: TaskId) -> bool {
        self.slots.pos_by_id.contains_key(&id)
    }

    /// Returns the enqueued task with the given id.
    pub fn get(&self, id: TaskId) -> Option<&Task<M>> {
        self.slots.pos_by_id.get(&id).map(|&idx| &self.slots.tasks[idx])
    }

    /// Returns the current priority of the enqueued task with the given id.
    pub fn priority_of(&self, id: TaskId) -> Option<Priority> {
        self.get(id).map(Task::priority)
    }

    /// Iterates over all enqueued tasks in heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = &Task<M>> {
        self.slots.tasks.iter()
    }

    /// Removes all tasks.
    pub fn clear(&mut self) {
        self.slots.tasks.clear();
        self.slots.pos_by_id.clear();
    }

    /// Inserts a new task into the queue.
    ///
    /// Ids must be unique: inserting an id that is already enqueued fails with
    /// [`InsertError::DuplicateId`], handing the task back and leaving the queue unchanged.
    pub fn insert(&mut self, task: Task<M>) -> Result<(), InsertError<M>> {
        if self.contains(task.id()) {
            debug!("Rejected duplicate task id {}", task.id());
            return Err(InsertError::DuplicateId(task));
        }

        let idx = self.slots.tasks.len();
        self.slots.pos_by_id.insert(task.id(), idx);
        self.slots.tasks.push(task);
        heap::sift_up(&mut self.slots, idx);
        Ok(())
    }

    /// Returns the task with the highest priority without removing it.
    pub fn peek_max(&self) -> Option<&Task<M>> {
        self.slots.tasks.first()
    }

    /// Removes and returns the task with the highest priority.
    pub fn extract_max(&mut self) -> Option<Task<M>> {
        let last = self.slots.tasks.len().checked_sub(1)?;

        // Move the root to the end, so popping it leaves a valid array
        self.slots.swap(0, last);
        let top = self.slots.tasks.pop()?;
        self.slots.pos_by_id.remove(&top.id());

        if last > 0 {
            // The former last task now sits at the root => sift it down
            heap::sift_down(&mut self.slots, 0, last - 1);
        }
        Some(top)
    }

    /// Raises the priority of task `id` to `new_priority`.
    ///
    /// Returns `false` without changing anything if the id is unknown or `new_priority` is not
    /// strictly greater than the current priority. Use [`try_increase_key`](Self::try_increase_key)
    /// to tell the two cases apart.
    pub fn increase_key(&mut self, id: TaskId, new_priority: Priority) -> bool {
        self.try_increase_key(id, new_priority).is_ok()
    }

    /// Lowers the priority of task `id` to `new_priority`.
    ///
    /// Returns `false` without changing anything if the id is unknown or `new_priority` is not
    /// strictly smaller than the current priority. Use [`try_decrease_key`](Self::try_decrease_key)
    /// to tell the two cases apart.
    pub fn decrease_key(&mut self, id: TaskId, new_priority: Priority) -> bool {
        self.try_decrease_key(id, new_priority).is_ok()
    }

    /// Like [`increase_key`](Self::increase_key), but reports why an update was not applied.
    pub fn try_increase_key(
        &mut self,
        id: TaskId,
        new_priority: Priority,
    ) -> Result<(), KeyUpdateError> {
        let idx = self.index_of(id)?;
        let current = self.slots.tasks[idx].priority();
        if new_priority <= current {
            return Err(KeyUpdateError::NotIncreased {
                id,
                current,
                requested: new_priority,
            });
        }

        self.slots.tasks[idx].set_priority(new_priority);
        // Priority only grew => the task can only move towards the root
        let rest = heap::sift_up(&mut self.slots, idx);
        trace!(
            "Increased task {} priority {} -> {} (slot {} -> {})",
            id, current, new_priority, idx, rest
        );
        Ok(())
    }

    /// Like [`decrease_key`](Self::decrease_key), but reports why an update was not applied.
    pub fn try_decrease_key(
        &mut self,
        id: TaskId,
        new_priority: Priority,
    ) -> Result<(), KeyUpdateError> {
        let idx = self.index_of(id)?;
        let current = self.slots.tasks[idx].priority();
        if new_priority >= current {
            return Err(KeyUpdateError::NotDecreased {
                id,
                current,
                requested: new_priority,
            });
        }

        self.slots.tasks[idx].set_priority(new_priority);
        // Priority only shrank => the task can only move towards the leaves
        let end = self.slots.tasks.len() - 1;
        let rest = heap::sift_down(&mut self.slots, idx, end);
        trace!(
            "Decreased task {} priority {} -> {} (slot {} -> {})",
            id, current, new_priority, idx, rest
        );
        Ok(())
    }

    /// Verifies the heap property and the consistency of the id index.
    pub fn validate(&self) -> Result<(), String> {
        let tasks = &self.slots.tasks;
        let pos_by_id = &self.slots.pos_by_id;

        if tasks.len() != pos_by_id.len() {
            return Err(format!(
                "Index holds {} ids, but the heap holds {} tasks",
                pos_by_id.len(),
                tasks.len()
            ));
        }

        for (idx, task) in tasks.iter().enumerate() {
            match pos_by_id.get(&task.id()) {
                Some(&pos) if pos == idx => {}
                Some(&pos) => {
                    return Err(format!(
                        "Task {} is at slot {}, but the index points to slot {}",
                        task.id(),
                        idx,
                        pos
                    ));
                }
                None => return Err(format!("Task {} at slot {} is not indexed", task.id(), idx)),
            }
        }

        if let Some(idx) = heap::first_violation(&self.slots) {
            let parent = heap::parent_of(idx);
            return Err(format!(
                "Heap property violated: slot {} has priority {}, its parent slot {} has {}",
                idx,
                tasks[idx].priority(),
                parent,
                tasks[parent].priority()
            ));
        }

        Ok(())
    }

    fn index_of(&self, id: TaskId) -> Result<usize, KeyUpdateError> {
        self.slots
            .pos_by_id
            .get(&id)
            .copied()
            .ok_or(KeyUpdateError::UnknownId(id))
    }
}

/// Error returned when a task cannot be inserted.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertError<M = ()> {
    /// A task with the same id is already enqueued. Carries the rejected task.
    DuplicateId(Task<M>),
}

impl<M> InsertError<M> {
    /// Id of the rejected task.
    pub fn id(&self) -> TaskId {
        match self {
            InsertError::DuplicateId(task) => task.id(),
        }
    }

    /// Returns ownership of the rejected task.
    pub fn into_task(self) -> Task<M> {
        match self {
            InsertError::DuplicateId(task) => task,
        }
    }
}

impl<M> fmt::Display for InsertError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::DuplicateId(task) => {
                write!(f, "A task with id {} is already enqueued", task.id())
            }
        }
    }
}

impl<M: fmt::Debug> Error for InsertError<M> {}

/// Reason a key update was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUpdateError {
    /// No task with this id is enqueued.
    UnknownId(TaskId),
    /// `increase_key` was called with a priority that is not strictly greater.
    NotIncreased {
        id: TaskId,
        current: Priority,
        requested: Priority,
    },
    /// `decrease_key` was called with a priority that is not strictly smaller.
    NotDecreased {
        id: TaskId,
        current: Priority,
        requested: Priority,
    },
}

impl fmt::Display for KeyUpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyUpdateError::UnknownId(id) => write!(f, "No task with id {} is enqueued", id),
            KeyUpdateError::NotIncreased {
                id,
                current,
                requested,
            } => write!(
                f,
                "Cannot increase task {} priority from {} to {}",
                id, current, requested
            ),
            KeyUpdateError::NotDecreased {
                id,
                current,
                requested,
            } => write!(
                f,
                "Cannot decrease task {} priority from {} to {}",
                id, current, requested
            ),
        }
    }
}

impl Error for KeyUpdateError {}
