use clap::{Parser, Subcommand};
use std::{error::Error, num::NonZeroUsize};
use taskheap::constants::{DEFAULT_BENCH_REPEATS, DEFAULT_BENCH_SIZES};

mod cli;

#[derive(Parser, Debug)]
#[command(author, version, about = "Heapsort and an indexed max-priority queue", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort integers with heapsort. Reads whitespace-separated integers from stdin if none are given.
    Sort {
        #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Compare heapsort, quicksort and the standard library sort on generated data.
    Bench {
        /// Input sizes, comma separated.
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_BENCH_SIZES)]
        sizes: Vec<usize>,
        /// Timed runs per algorithm, distribution and size.
        #[arg(long, default_value_t = DEFAULT_BENCH_REPEATS)]
        repeats: NonZeroUsize,
        /// Seed for the data generator. Random if omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Never show a progress bar.
        #[arg(long)]
        no_progress_bar: bool,
    },
    /// Run the task scheduler simulation on a priority queue.
    Schedule {
        /// Priority of task 0, 1, 2, ... Uses a built-in set if none are given.
        #[arg(value_name = "PRIORITIES", allow_negative_numbers = true)]
        priorities: Vec<i64>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Command::Sort { numbers } => cli::sort::sort(numbers),
        Command::Bench {
            sizes,
            repeats,
            seed,
            no_progress_bar,
        } => cli::bench::bench(sizes, repeats, seed, no_progress_bar),
        Command::Schedule { priorities } => cli::schedule::schedule(priorities),
    }
}
