use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use num_format::{Locale, ToFormattedString};
use std::{error::Error, time::Duration};
use taskheap::{
    constants::PROGRESS_BAR_THRESHOLD,
    distribution::Distribution,
    utils::{human_duration, mean_duration},
};

pub mod bench;
pub mod schedule;
pub mod sort;

/// Initializes logging from `RUST_LOG` (default `info`). Log lines are routed through the
/// returned [`MultiProgress`], so they don't tear progress bars drawn with it.
pub fn init_logging() -> Result<MultiProgress, Box<dyn Error>> {
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).build();
    let level = logger.filter();

    let progress = MultiProgress::new();
    LogWrapper::new(progress.clone(), logger).try_init()?;
    log::set_max_level(level);

    Ok(progress)
}

/// Whether the estimated remaining runtime is long enough to warrant a progress bar.
pub fn should_use_progress_bar(num_remaining: usize, first_duration: Duration) -> bool {
    first_duration.saturating_mul(num_remaining.try_into().unwrap_or(u32::MAX))
        > PROGRESS_BAR_THRESHOLD
}

pub fn create_progress_bar(progress: &MultiProgress, len: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len} ({eta}) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.add(ProgressBar::new(len as u64).with_style(style))
}

/// Timings of one algorithm on one distribution and input size.
pub struct BenchResult {
    pub algorithm: &'static str,
    pub distribution: Distribution,
    pub size: usize,
    pub durations: Vec<Duration>,
}

impl BenchResult {
    pub fn mean(&self) -> Duration {
        mean_duration(&self.durations)
    }
}

/// Prints one row per benchmark result. The fastest algorithm of each (distribution, size)
/// group is highlighted.
pub fn print_bench_table(results: &[BenchResult]) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Algorithm", "Distribution", "n", "Avg", "Min", "Max"]);

    for result in results {
        let fastest = results
            .iter()
            .filter(|r| r.distribution == result.distribution && r.size == result.size)
            .map(BenchResult::mean)
            .min()
            .unwrap_or(Duration::ZERO);
        let mean = result.mean();
        let min = result.durations.iter().min().copied().unwrap_or_default();
        let max = result.durations.iter().max().copied().unwrap_or_default();

        let mean_cell = if mean == fastest {
            Cell::new(human_duration(mean)).fg(Color::Green)
        } else {
            Cell::new(human_duration(mean))
        };

        table.add_row(vec![
            Cell::new(result.algorithm),
            Cell::new(result.distribution),
            Cell::new(result.size.to_formatted_string(&Locale::en))
                .set_alignment(CellAlignment::Right),
            mean_cell.set_alignment(CellAlignment::Right),
            Cell::new(human_duration(min)).set_alignment(CellAlignment::Right),
            Cell::new(human_duration(max)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}
