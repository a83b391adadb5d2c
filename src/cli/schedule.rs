use crate::cli;
use log::{info, warn};
use std::error::Error;
use taskheap::{
    Priority,
    scheduler::{self, DEFAULT_PRIORITIES},
};

/// Runs the scheduler simulation on `priorities`, then the key update demo on its own tasks.
pub fn schedule(priorities: Vec<Priority>) -> Result<(), Box<dyn Error>> {
    cli::init_logging()?;

    let priorities = if priorities.is_empty() {
        DEFAULT_PRIORITIES.to_vec()
    } else {
        priorities
    };

    let tasks = scheduler::tasks_from_priorities(&priorities);
    info!("Running scheduler simulation with {} task(s)", tasks.len());
    let processed = scheduler::simulate(tasks)?;

    info!("Tasks processed in descending priority order:");
    for task in &processed {
        info!("  {}", task);
    }

    info!("Running key update demo");
    let demo = scheduler::key_update_demo(scheduler::demo_tasks())?;
    for (id, priority) in &demo.first_round {
        info!("  Task(id={}, priority={})", id, priority);
    }

    let updates = [
        (scheduler::DEMO_INCREASE, demo.increased),
        (scheduler::DEMO_DECREASE, demo.decreased),
    ];
    for ((id, priority), result) in updates {
        match result {
            Ok(()) => info!("Task {} priority set to {}", id, priority),
            Err(e) => warn!("Skipped key update: {}", e),
        }
    }

    info!("Tasks after priority updates:");
    for task in &demo.second_round {
        info!("  {}", task);
    }

    Ok(())
}
