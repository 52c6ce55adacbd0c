use crate::reports;
use clap::Args;
use dicelab_core::config::parse_method;
use dicelab_core::distribution::{self, Method};
use dicelab_core::simulation;
use std::error::Error;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Dice count to cross-check.
    #[arg(long, default_value_t = 2)]
    pub dice: u32,

    /// Number of random rolls.
    #[arg(long, default_value_t = 1_000_000)]
    pub rolls: u64,

    /// RNG seed; omit for a fresh one.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computation backend for the exact side.
    #[arg(long, default_value = "auto", value_parser = parse_method)]
    pub method: Method,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn Error>> {
    let exact = distribution::compute(args.dice, args.method)?;

    info!("🎲 Rolling {} hands of {} dice...", args.rolls, args.dice);
    let sim = simulation::simulate(args.dice, args.rolls, args.seed)?;
    info!("    Seed: {}", sim.seed());

    reports::print_simulation_table(&exact, &sim);
    println!(
        "\nMax |empirical - exact| over {} rolls: {:.6}",
        sim.rolls(),
        sim.max_abs_deviation(&exact)?
    );

    Ok(())
}
