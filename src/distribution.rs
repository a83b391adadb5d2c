use std::fmt;

/// Shapes of input data used to exercise the sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Uniformly random values in `[0, 2n]`.
    Random,
    /// Even numbers ascending from 0.
    Sorted,
    /// Even numbers descending from `2n`.
    Reverse,
    /// Random picks from a handful of distinct values.
    FewUnique,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
        Distribution::FewUnique,
    ];

    const FEW_UNIQUE_VALUES: [i64; 5] = [10, 20, 30, 40, 50];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reverse => "reverse",
            Distribution::FewUnique => "few_unique",
        }
    }

    /// Generates `n` values following this distribution.
    pub fn generate(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<i64> {
        let n = n as i64;
        match self {
            Distribution::Random => (0..n).map(|_| rng.i64(0..=2 * n)).collect(),
            Distribution::Sorted => (0..n).map(|i| 2 * i).collect(),
            Distribution::Reverse => (0..n).map(|i| 2 * (n - i)).collect(),
            Distribution::FewUnique => (0..n)
                .map(|_| Self::FEW_UNIQUE_VALUES[rng.usize(..Self::FEW_UNIQUE_VALUES.len())])
                .collect(),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
