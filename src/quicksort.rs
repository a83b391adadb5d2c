use log::trace;

/// Sorts `a` in ascending order, in place, using quicksort with a random pivot.
///
/// Partitions are processed from an explicit work stack instead of recursing. The smaller side
/// of each split is handled first, so the stack never holds more than O(log n) ranges.
pub fn quicksort<T: PartialOrd + Clone>(a: &mut [T]) {
    quicksort_with_rng(a, &mut fastrand::Rng::new());
}

/// Like [`quicksort`], but draws pivots from the given generator.
pub fn quicksort_with_rng<T: PartialOrd + Clone>(a: &mut [T], rng: &mut fastrand::Rng) {
    if a.len() <= 1 {
        return;
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, a.len() - 1)];
    let mut max_depth = 1;

    while let Some((lo, hi)) = stack.pop() {
        let (left_end, right_start) = partition(a, lo, hi, rng);

        // Left part is [lo, left_end], right part is [right_start, hi]
        let left = left_end.filter(|&end| end > lo).map(|end| (lo, end));
        let right = (right_start < hi).then_some((right_start, hi));

        match (left, right) {
            (Some(l), Some(r)) => {
                // Push the larger range first so the smaller one is popped next
                if l.1 - l.0 > r.1 - r.0 {
                    stack.push(l);
                    stack.push(r);
                } else {
                    stack.push(r);
                    stack.push(l);
                }
            }
            (Some(range), None) | (None, Some(range)) => stack.push(range),
            (None, None) => {}
        }
        max_depth = max_depth.max(stack.len());
    }

    trace!("Quicksorted {} elements, max stack depth {}", a.len(), max_depth);
}

/// Hoare-style partition of `[lo, hi]` around a random pivot value.
///
/// Returns the inclusive end of the left part (`None` if it fell below index 0) and the start of
/// the right part. Everything left of the right part is `<=` pivot and everything right of the
/// left part is `>=` pivot.
fn partition<T: PartialOrd + Clone>(
    a: &mut [T],
    lo: usize,
    hi: usize,
    rng: &mut fastrand::Rng,
) -> (Option<usize>, usize) {
    let pivot = a[rng.usize(lo..=hi)].clone();

    // `j` may drop to lo - 1, which is -1 for the first range
    let mut i = lo as isize;
    let mut j = hi as isize;
    while i <= j {
        while a[i as usize] < pivot {
            i += 1;
        }
        while a[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            a.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    (usize::try_from(j).ok(), i as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Distribution;

    #[test]
    fn test_quicksort() {
        let cases: Vec<(Vec<i64>, Vec<i64>)> = vec![
            (vec![], vec![]),
            (vec![5], vec![5]),
            (vec![2, 1], vec![1, 2]),
            (vec![1, 1, 1, 1], vec![1, 1, 1, 1]),
            (vec![14, 7, 22, 3, 18, 11, 5], vec![3, 5, 7, 11, 14, 18, 22]),
            (vec![9, -6, 15, -2, 0, 7, -3], vec![-6, -3, -2, 0, 7, 9, 15]),
        ];

        let mut rng = fastrand::Rng::with_seed(1);
        for (mut input, expected) in cases {
            let original = input.clone();
            quicksort_with_rng(&mut input, &mut rng);
            assert_eq!(input, expected, "Sorting {:?}", original);
        }
    }

    #[test]
    fn test_quicksort_matches_std_sort() {
        let mut rng = fastrand::Rng::with_seed(42);
        for distribution in Distribution::ALL {
            for n in [2, 3, 16, 100, 1000, 5000] {
                let mut values = distribution.generate(n, &mut rng);
                let mut expected = values.clone();
                expected.sort_unstable();

                quicksort_with_rng(&mut values, &mut rng);
                assert_eq!(values, expected, "{} with n={}", distribution, n);
            }
        }
    }

    #[test]
    fn test_partition_bounds() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..100 {
            let mut values: Vec<i64> = (0..20).map(|_| rng.i64(0..5)).collect();
            let hi = values.len() - 1;
            let (left_end, right_start) = partition(&mut values, 0, hi, &mut rng);

            assert!(right_start <= hi + 1);
            if let Some(end) = left_end {
                assert!(end < right_start);
                let max_left = values[..=end].iter().max().copied();
                let min_right = values[right_start..].iter().min().copied();
                if let (Some(l), Some(r)) = (max_left, min_right) {
                    assert!(l <= r, "{:?} split at {}..{}", values, end, right_start);
                }
            }
        }
    }
}
