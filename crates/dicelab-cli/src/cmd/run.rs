use crate::charts;
use crate::reports;
use clap::Args;
use dicelab_core::config::ComputeParams;
use dicelab_core::consts::CURVE_SAMPLES;
use dicelab_core::distribution;
use std::error::Error;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: ComputeParams,

    /// Directory the chart PNGs are written to.
    #[arg(long, default_value = "charts")]
    pub out_dir: String,
}

/// The classic fixed sequence: report every dice count in ascending
/// order, then one chart per count, then the comparison chart.
pub fn run(args: RunArgs) -> Result<(), Box<dyn Error>> {
    args.params.validate()?;

    let mut sweep = Vec::new();
    for dice in args.params.dice_range() {
        let dist = distribution::compute(dice, args.params.method)?;
        reports::print_distribution_lines(&dist);
        sweep.push(dist);
    }

    fs::create_dir_all(&args.out_dir)?;
    for dist in &sweep {
        let path = charts::per_dice_path(&args.out_dir, dist.dice_count());
        charts::render_distribution_chart(dist, CURVE_SAMPLES, charts::PER_DICE_SIZE, &path)?;
        info!("📊 Wrote {}", path.display());
    }

    let summary = charts::summary_path(&args.out_dir);
    charts::render_summary_chart(&sweep, CURVE_SAMPLES, charts::SUMMARY_SIZE, &summary)?;
    info!("📊 Wrote {}", summary.display());

    Ok(())
}
