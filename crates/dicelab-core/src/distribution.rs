use crate::consts::{AUTO_ENUMERATION_LIMIT, FACES, MAX_DICE, MAX_ENUMERATED_DICE};
use crate::error::{DiceLabError, DlResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Enumerate small counts, convolve large ones.
    Auto,
    /// Walk the full Cartesian product of face values (the reference
    /// semantics; 6^n tuples).
    Enumerate,
    /// Dynamic-programming recurrence over per-die sums. Identical
    /// output, O(n^2 * range) instead of O(6^n).
    Convolve,
}

/// Exact distribution of the sum of `dice_count` fair six-sided dice.
///
/// Counts are stored densely, indexed by `sum - dice_count`. Every sum
/// in `[dice_count, 6 * dice_count]` is reachable, so there are no gaps.
/// Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumDistribution {
    dice_count: u32,
    counts: Vec<u64>,
    total: u64,
}

/// Computes the exact sum distribution for `dice_count` dice.
///
/// Rejects `dice_count < 1` and counts whose outcome totals would not
/// fit in a u64 (`> MAX_DICE`).
pub fn compute(dice_count: u32, method: Method) -> DlResult<SumDistribution> {
    if dice_count < 1 {
        return Err(DiceLabError::InvalidDiceCount(
            "at least one die is required".to_string(),
        ));
    }
    if dice_count > MAX_DICE {
        return Err(DiceLabError::InvalidDiceCount(format!(
            "{} exceeds the supported maximum of {}",
            dice_count, MAX_DICE
        )));
    }

    let dist = match method {
        Method::Enumerate => {
            if dice_count > MAX_ENUMERATED_DICE {
                return Err(DiceLabError::InvalidParams(format!(
                    "enumeration walks 6^{} tuples; use 'convolve' (or 'auto') above {} dice",
                    dice_count, MAX_ENUMERATED_DICE
                )));
            }
            enumerate(dice_count)
        }
        Method::Convolve => convolve(dice_count),
        Method::Auto => {
            if dice_count <= AUTO_ENUMERATION_LIMIT {
                enumerate(dice_count)
            } else {
                convolve(dice_count)
            }
        }
    };

    debug_assert_eq!(dist.counts.iter().sum::<u64>(), dist.total);
    Ok(dist)
}

/// Brute force: tally the sum of every tuple in {1..6}^n.
fn enumerate(dice_count: u32) -> SumDistribution {
    let min_sum = dice_count;
    let max_sum = FACES * dice_count;
    let mut counts = vec![0u64; (max_sum - min_sum + 1) as usize];
    let mut total = 0u64;

    let tuples = itertools::repeat_n(1..=FACES, dice_count as usize).multi_cartesian_product();
    for faces in tuples {
        let sum: u32 = faces.iter().sum();
        counts[(sum - min_sum) as usize] += 1;
        total += 1;
    }

    debug!("enumerated {} tuples for {} dice", total, dice_count);
    SumDistribution {
        dice_count,
        counts,
        total,
    }
}

/// Convolution: fold one die at a time into the running sum counts.
fn convolve(dice_count: u32) -> SumDistribution {
    // One die: a single way to reach each of 1..=6.
    let mut counts = vec![1u64; FACES as usize];

    for _ in 1..dice_count {
        let mut next = vec![0u64; counts.len() + (FACES - 1) as usize];
        for (i, &ways) in counts.iter().enumerate() {
            for face in 0..FACES as usize {
                next[i + face] += ways;
            }
        }
        counts = next;
    }

    SumDistribution {
        dice_count,
        counts,
        total: (FACES as u64).pow(dice_count),
    }
}

impl SumDistribution {
    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    /// Smallest achievable sum (all ones).
    pub fn min_sum(&self) -> u32 {
        self.dice_count
    }

    /// Largest achievable sum (all sixes).
    pub fn max_sum(&self) -> u32 {
        FACES * self.dice_count
    }

    /// Number of distinct achievable sums (always `5n + 1`).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of outcome tuples, `6^dice_count`.
    pub fn total_outcomes(&self) -> u64 {
        self.total
    }

    /// Achievable sums, ascending.
    pub fn sums(&self) -> Vec<u32> {
        (self.min_sum()..=self.max_sum()).collect()
    }

    /// Probability per sum, aligned with `sums()`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&c| c as f64 / self.total as f64)
            .collect()
    }

    /// Number of tuples producing `sum`; zero outside the support.
    pub fn count_of(&self, sum: u32) -> u64 {
        if sum < self.min_sum() || sum > self.max_sum() {
            return 0;
        }
        self.counts[(sum - self.min_sum()) as usize]
    }

    pub fn probability_of(&self, sum: u32) -> f64 {
        self.count_of(sum) as f64 / self.total as f64
    }

    /// `(sum, probability)` pairs, ascending by sum.
    pub fn entries(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        let min = self.min_sum();
        let total = self.total as f64;
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &c)| (min + i as u32, c as f64 / total))
    }

    pub fn mean(&self) -> f64 {
        self.entries().map(|(s, p)| s as f64 * p).sum()
    }

    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.entries()
            .map(|(s, p)| (s as f64 - mean).powi(2) * p)
            .sum()
    }

    /// Sum value(s) with the highest count: one for odd support sizes,
    /// two for even ones.
    pub fn modes(&self) -> Vec<u32> {
        let best = self.counts.iter().copied().max().unwrap_or(0);
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == best)
            .map(|(i, _)| self.min_sum() + i as u32)
            .collect()
    }
}
