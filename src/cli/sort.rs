use crate::cli;
use itertools::Itertools;
use log::info;
use std::{
    error::Error,
    io::{self, Read},
};
use taskheap::{heapsort, measure_time, utils::human_duration};

/// Sorts the given numbers (or those read from stdin) and prints them on one line.
pub fn sort(numbers: Vec<i64>) -> Result<(), Box<dyn Error>> {
    cli::init_logging()?;

    let mut numbers = if numbers.is_empty() {
        read_numbers(io::stdin().lock())?
    } else {
        numbers
    };

    let ((), elapsed) = measure_time!({ heapsort(&mut numbers) });
    println!("{}", numbers.iter().join(" "));
    info!(
        "Sorted {} number(s) in {}",
        numbers.len(),
        human_duration(elapsed)
    );

    Ok(())
}

/// Parses whitespace-separated integers.
fn read_numbers(mut reader: impl Read) -> Result<Vec<i64>, Box<dyn Error>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let numbers = input
        .split_ascii_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| format!("Invalid number {:?}: {}", token, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_numbers() {
        let numbers = read_numbers("14 7\n22\t-3  18\n".as_bytes()).unwrap();
        assert_eq!(numbers, vec![14, 7, 22, -3, 18]);

        assert!(read_numbers("".as_bytes()).unwrap().is_empty());

        let err = read_numbers("1 two 3".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("\"two\""));
    }
}
