use crate::charts;
use clap::Args;
use dicelab_core::config::ComputeParams;
use dicelab_core::consts::CURVE_SAMPLES;
use dicelab_core::distribution;
use std::error::Error;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub params: ComputeParams,

    /// Directory the chart PNGs are written to.
    #[arg(long, default_value = "charts")]
    pub out_dir: String,

    /// Chart width in pixels.
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Sample count for the interpolated curve.
    #[arg(long, default_value_t = CURVE_SAMPLES)]
    pub samples: usize,
}

pub fn run(args: ChartArgs) -> Result<(), Box<dyn Error>> {
    args.params.validate()?;
    if args.samples == 0 {
        return Err("--samples must be positive".into());
    }

    let size = (args.width, args.height);
    fs::create_dir_all(&args.out_dir)?;

    let mut sweep = Vec::new();
    for dice in args.params.dice_range() {
        let dist = distribution::compute(dice, args.params.method)?;
        let path = charts::per_dice_path(&args.out_dir, dice);
        charts::render_distribution_chart(&dist, args.samples, size, &path)?;
        info!("📊 Wrote {}", path.display());
        sweep.push(dist);
    }

    let summary = charts::summary_path(&args.out_dir);
    charts::render_summary_chart(&sweep, args.samples, size, &summary)?;
    info!("📊 Wrote {}", summary.display());

    Ok(())
}
