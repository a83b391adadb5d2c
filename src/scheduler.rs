use crate::priority_queue::{InsertError, KeyUpdateError, MaxHeapPQ};
use crate::task::{Priority, Task, TaskId};
use log::debug;

/// Priorities of the ten tasks in the default simulation run.
pub const DEFAULT_PRIORITIES: [Priority; 10] = [15, 45, 30, 70, 25, 55, 40, 60, 35, 50];

/// Enqueues all `tasks` and processes them one by one, highest priority first.
/// Returns the tasks in processing order.
pub fn simulate<M>(
    tasks: impl IntoIterator<Item = Task<M>>,
) -> Result<Vec<Task<M>>, InsertError<M>> {
    let tasks = tasks.into_iter();
    let mut pq = MaxHeapPQ::with_capacity(tasks.size_hint().0);
    for task in tasks {
        pq.insert(task)?;
    }

    let mut processed = Vec::with_capacity(pq.len());
    while let Some(task) = pq.extract_max() {
        debug!("Processing {}", task);
        processed.push(task);
    }
    Ok(processed)
}

/// Builds task `i` with priority `priorities[i]`, arriving at time `i`.
pub fn tasks_from_priorities(priorities: &[Priority]) -> Vec<Task> {
    priorities
        .iter()
        .enumerate()
        .map(|(i, &priority)| Task::new(i as TaskId, priority).with_arrival_time(i as f64))
        .collect()
}

/// Priorities of tasks 1..=7 in the key update demo.
pub const DEMO_PRIORITIES: [Priority; 7] = [35, 50, 15, 70, 25, 90, 40];

/// Task 3 (priority 15) is raised above everything but the current max.
pub const DEMO_INCREASE: (TaskId, Priority) = (3, 80);

/// Task 6 (priority 90, the current max) is demoted to the bottom.
pub const DEMO_DECREASE: (TaskId, Priority) = (6, 20);

/// Builds task `i + 1` with priority `DEMO_PRIORITIES[i]`.
pub fn demo_tasks() -> Vec<Task> {
    DEMO_PRIORITIES
        .iter()
        .zip(1..)
        .map(|(&priority, id)| Task::new(id, priority))
        .collect()
}

/// Outcome of [`key_update_demo`].
#[derive(Debug)]
pub struct KeyUpdateDemo<M = ()> {
    /// (id, priority) in processing order before any key update.
    pub first_round: Vec<(TaskId, Priority)>,
    pub increased: Result<(), KeyUpdateError>,
    pub decreased: Result<(), KeyUpdateError>,
    /// Processing order after re-enqueueing and updating the keys.
    pub second_round: Vec<Task<M>>,
}

/// Drains `tasks` once, re-enqueues them, applies [`DEMO_INCREASE`] and [`DEMO_DECREASE`], and
/// drains the queue again.
pub fn key_update_demo<M>(
    tasks: impl IntoIterator<Item = Task<M>>,
) -> Result<KeyUpdateDemo<M>, InsertError<M>> {
    let processed = simulate(tasks)?;
    let first_round = processed.iter().map(|t| (t.id(), t.priority())).collect();

    let mut pq = MaxHeapPQ::with_capacity(processed.len());
    for task in processed {
        pq.insert(task)?;
    }

    let (id, priority) = DEMO_INCREASE;
    let increased = pq.try_increase_key(id, priority);
    let (id, priority) = DEMO_DECREASE;
    let decreased = pq.try_decrease_key(id, priority);

    let mut second_round = Vec::with_capacity(pq.len());
    while let Some(task) = pq.extract_max() {
        debug!("Processing {}", task);
        second_round.push(task);
    }

    Ok(KeyUpdateDemo {
        first_round,
        increased,
        decreased,
        second_round,
    })
}
