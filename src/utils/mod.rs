use std::time::Duration;

/// (upper bound in seconds, unit, scale) per unit, smallest first.
const DURATION_UNITS: [(f64, &str, f64); 3] = [
    (1e-6, "ns", 1e9),
    (1e-3, "µs", 1e6),
    (1.0, "ms", 1e3),
];

/// Formats a duration with one decimal in the largest unit below it, up to seconds.
pub fn human_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    DURATION_UNITS
        .iter()
        .find(|(bound, _, _)| secs < *bound)
        .map(|(_, unit, scale)| format!("{:.1}{}", secs * scale, unit))
        .unwrap_or_else(|| format!("{:.1}s", secs))
}

/// Averages durations, `Duration::ZERO` for an empty slice.
pub fn mean_duration(durations: &[Duration]) -> Duration {
    match u32::try_from(durations.len()) {
        Ok(0) | Err(_) => Duration::ZERO,
        Ok(n) => durations.iter().sum::<Duration>() / n,
    }
}

/// Evaluates a block, yielding `(value, elapsed)`.
#[macro_export]
macro_rules! measure_time {
    ($block:block) => {{
        let start = std::time::Instant::now();
        let value = $block;
        (value, start.elapsed())
    }};
}

/// Evaluates a block, pushes its runtime onto `$durations` and yields its value.
#[macro_export]
macro_rules! record_time {
    ($durations:expr, $block:block) => {{
        let (value, elapsed) = $crate::measure_time!($block);
        $durations.push(elapsed);
        value
    }};
}
