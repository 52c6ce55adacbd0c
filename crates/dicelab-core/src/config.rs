use crate::consts::{DEFAULT_MAX_DICE, DEFAULT_MIN_DICE, MAX_DICE};
use crate::distribution::Method;
use crate::error::{DiceLabError, DlResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeParams {
    /// Smallest dice count in the sweep.
    #[arg(long, default_value_t = DEFAULT_MIN_DICE)]
    pub min_dice: u32,

    /// Largest dice count in the sweep.
    #[arg(long, default_value_t = DEFAULT_MAX_DICE)]
    pub max_dice: u32,

    /// Computation backend: auto, enumerate or convolve.
    #[arg(long, default_value = "auto", value_parser = parse_method)]
    pub method: Method,
}

impl Default for ComputeParams {
    fn default() -> Self {
        Self {
            min_dice: DEFAULT_MIN_DICE,
            max_dice: DEFAULT_MAX_DICE,
            method: Method::Auto,
        }
    }
}

impl ComputeParams {
    pub fn validate(&self) -> DlResult<()> {
        if self.min_dice < 1 {
            return Err(DiceLabError::InvalidParams(
                "--min-dice must be at least 1".to_string(),
            ));
        }
        if self.min_dice > self.max_dice {
            return Err(DiceLabError::InvalidParams(format!(
                "--min-dice ({}) must not exceed --max-dice ({})",
                self.min_dice, self.max_dice
            )));
        }
        if self.max_dice > MAX_DICE {
            return Err(DiceLabError::InvalidParams(format!(
                "--max-dice ({}) exceeds the supported maximum of {}",
                self.max_dice, MAX_DICE
            )));
        }
        Ok(())
    }

    /// Inclusive dice counts covered by the sweep, ascending.
    pub fn dice_range(&self) -> RangeInclusive<u32> {
        self.min_dice..=self.max_dice
    }
}

pub fn parse_method(s: &str) -> Result<Method, String> {
    Method::from_str(s).map_err(|_| format!("unknown method '{}' (auto, enumerate, convolve)", s))
}
