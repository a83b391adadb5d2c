use crate::cli::{self, BenchResult};
use itertools::iproduct;
use log::{debug, info};
use std::{error::Error, num::NonZeroUsize, time::Instant};
use taskheap::{
    distribution::Distribution, heapsort, measure_time, quicksort, record_time,
    utils::human_duration,
};

/// A named in-place sort of integers.
struct Algorithm {
    name: &'static str,
    sort: fn(&mut [i64]),
}

static ALGORITHMS: [Algorithm; 3] = [
    Algorithm {
        name: "heapsort",
        sort: heapsort::<i64>,
    },
    Algorithm {
        name: "quicksort",
        sort: quicksort::<i64>,
    },
    Algorithm {
        name: "std unstable",
        sort: <[i64]>::sort_unstable,
    },
];

pub fn bench(
    sizes: Vec<usize>,
    repeats: NonZeroUsize,
    seed: Option<u64>,
    no_progress_bar: bool,
) -> Result<(), Box<dyn Error>> {
    let progress = cli::init_logging()?;

    let start = Instant::now();
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    info!(
        "Benchmarking {} algorithm(s) on {} distribution(s), sizes {:?}, {} run(s) each (seed {})",
        ALGORITHMS.len(),
        Distribution::ALL.len(),
        sizes,
        repeats,
        rng.get_seed()
    );

    let mut jobs = iproduct!(ALGORITHMS.iter(), Distribution::ALL, sizes.iter().copied());
    let mut results = Vec::new();

    // Run the first job to estimate the remaining runtime
    let Some((algorithm, distribution, size)) = jobs.next() else {
        return Ok(());
    };
    let (first, first_duration) =
        measure_time!({ run_job(algorithm, distribution, size, repeats, &mut rng) });
    results.push(first?);

    let remaining: Vec<_> = jobs.collect();
    if !remaining.is_empty() {
        // Create a progress bar if the remaining time is significant enough
        let pb = if !no_progress_bar
            && cli::should_use_progress_bar(remaining.len(), first_duration)
        {
            let pb = cli::create_progress_bar(&progress, remaining.len() + 1);
            pb.set_position(1); // Account for the first job we just ran
            Some(pb)
        } else {
            None
        };

        for (algorithm, distribution, size) in remaining {
            results.push(run_job(algorithm, distribution, size, repeats, &mut rng)?);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = &pb {
            pb.finish_with_message("done");
        }
    }

    cli::print_bench_table(&results);
    info!("Total runtime: {}", human_duration(start.elapsed()));

    Ok(())
}

/// Times `repeats` runs of one algorithm, each on freshly generated data.
fn run_job(
    algorithm: &Algorithm,
    distribution: Distribution,
    size: usize,
    repeats: NonZeroUsize,
    rng: &mut fastrand::Rng,
) -> Result<BenchResult, Box<dyn Error>> {
    let mut durations = Vec::with_capacity(repeats.get());

    for _ in 0..repeats.get() {
        let mut data = distribution.generate(size, rng);
        let mut expected = data.clone();
        expected.sort_unstable();

        record_time!(durations, { (algorithm.sort)(&mut data) });

        if data != expected {
            return Err(format!(
                "{} produced unsorted output on {} data of size {}",
                algorithm.name, distribution, size
            )
            .into());
        }
    }

    let result = BenchResult {
        algorithm: algorithm.name,
        distribution,
        size,
        durations,
    };
    debug!(
        "{:>12} | {:>10} | n={:>6} | avg {}",
        result.algorithm,
        result.distribution,
        result.size,
        human_duration(result.mean())
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_job_checks_every_algorithm() {
        let mut rng = fastrand::Rng::with_seed(9);
        let repeats = NonZeroUsize::new(3).unwrap();

        for algorithm in &ALGORITHMS {
            for distribution in Distribution::ALL {
                let result = run_job(algorithm, distribution, 257, repeats, &mut rng).unwrap();
                assert_eq!(result.algorithm, algorithm.name);
                assert_eq!(result.size, 257);
                assert_eq!(result.durations.len(), 3);
            }
        }
    }

    #[test]
    fn test_run_job_rejects_broken_sort() {
        fn reverse(a: &mut [i64]) {
            a.reverse();
        }
        let broken = Algorithm {
            name: "broken",
            sort: reverse,
        };

        let mut rng = fastrand::Rng::with_seed(9);
        let err = run_job(
            &broken,
            Distribution::Sorted,
            10,
            NonZeroUsize::MIN,
            &mut rng,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("broken"));
    }
}
