use std::{num::NonZeroUsize, time::Duration};

/// Minimal runtime after which to show a progress bar instead of simple log messages.
pub const PROGRESS_BAR_THRESHOLD: Duration = Duration::from_millis(500);

/// Input sizes benchmarked when none are given.
pub const DEFAULT_BENCH_SIZES: [usize; 2] = [1000, 2000];

/// Timed runs per (algorithm, distribution, size) when not given.
pub const DEFAULT_BENCH_REPEATS: NonZeroUsize = NonZeroUsize::new(2).unwrap();
