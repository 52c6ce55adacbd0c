use crate::consts::{FACES, MAX_DICE};
use crate::distribution::SumDistribution;
use crate::error::{DiceLabError, DlResult};
use rayon::prelude::*;
use tracing::debug;

/// Rolls per parallel work unit. Each chunk derives its own RNG from the
/// run seed and its index, so results are identical for a given seed no
/// matter how rayon schedules the chunks.
const CHUNK_ROLLS: u64 = 1 << 16;

/// Empirical sum counts from rolling `rolls` virtual hands of dice.
#[derive(Debug, Clone)]
pub struct Simulation {
    dice_count: u32,
    rolls: u64,
    seed: u64,
    counts: Vec<u64>,
}

/// Rolls `rolls` hands of `dice_count` dice and tallies the sums.
///
/// Pass a seed for reproducible output; `None` draws one from thread
/// entropy. The tally is exact; only the faces are random.
pub fn simulate(dice_count: u32, rolls: u64, seed: Option<u64>) -> DlResult<Simulation> {
    if dice_count < 1 || dice_count > MAX_DICE {
        return Err(DiceLabError::InvalidDiceCount(format!(
            "{} is outside the supported range 1..={}",
            dice_count, MAX_DICE
        )));
    }
    if rolls == 0 {
        return Err(DiceLabError::InvalidParams(
            "--rolls must be positive".to_string(),
        ));
    }

    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    let len = (FACES * dice_count - dice_count + 1) as usize;
    let chunks = rolls.div_ceil(CHUNK_ROLLS);

    let counts = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng =
                fastrand::Rng::with_seed(seed ^ (chunk + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
            let start = chunk * CHUNK_ROLLS;
            let todo = CHUNK_ROLLS.min(rolls - start);

            let mut local = vec![0u64; len];
            for _ in 0..todo {
                let mut sum = 0u32;
                for _ in 0..dice_count {
                    sum += rng.u32(1..=FACES);
                }
                local[(sum - dice_count) as usize] += 1;
            }
            local
        })
        .reduce(
            || vec![0u64; len],
            |mut acc, local| {
                for (a, b) in acc.iter_mut().zip(local) {
                    *a += b;
                }
                acc
            },
        );

    debug!(
        "simulated {} rolls of {} dice (seed {})",
        rolls, dice_count, seed
    );
    Ok(Simulation {
        dice_count,
        rolls,
        seed,
        counts,
    })
}

impl Simulation {
    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Seed actually used, whether supplied or drawn from entropy.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Observed tally per sum, indexed like the exact distribution.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn sums(&self) -> Vec<u32> {
        (self.dice_count..=FACES * self.dice_count).collect()
    }

    pub fn empirical_probability_of(&self, sum: u32) -> f64 {
        if sum < self.dice_count || sum > FACES * self.dice_count {
            return 0.0;
        }
        self.counts[(sum - self.dice_count) as usize] as f64 / self.rolls as f64
    }

    pub fn empirical_probabilities(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&c| c as f64 / self.rolls as f64)
            .collect()
    }

    /// Largest absolute gap between empirical and exact probabilities.
    pub fn max_abs_deviation(&self, exact: &SumDistribution) -> DlResult<f64> {
        if exact.dice_count() != self.dice_count {
            return Err(DiceLabError::InvalidParams(format!(
                "simulation used {} dice but the exact distribution has {}",
                self.dice_count,
                exact.dice_count()
            )));
        }
        Ok(self
            .sums()
            .iter()
            .map(|&s| (self.empirical_probability_of(s) - exact.probability_of(s)).abs())
            .fold(0.0, f64::max))
    }
}
