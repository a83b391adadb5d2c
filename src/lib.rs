pub mod constants;
pub mod distribution;
pub mod heap;
pub mod heapsort;
pub mod priority_queue;
pub mod quicksort;
pub mod scheduler;
pub mod task;
pub mod utils;

pub use heapsort::heapsort;
pub use priority_queue::{InsertError, KeyUpdateError, MaxHeapPQ};
pub use quicksort::quicksort;
pub use task::{Priority, Task, TaskId};
