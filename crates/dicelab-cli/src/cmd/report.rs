use crate::reports;
use clap::Args;
use dicelab_core::config::ComputeParams;
use dicelab_core::distribution;
use dicelab_core::export;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub params: ComputeParams,

    /// Also write the sweep as a JSON array of records.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Also write the sweep as dice,sum,count,probability CSV rows.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn Error>> {
    args.params.validate()?;

    let mut sweep = Vec::new();
    for dice in args.params.dice_range() {
        let dist = distribution::compute(dice, args.params.method)?;
        reports::print_distribution_lines(&dist);
        reports::print_distribution_table(&dist);
        sweep.push(dist);
    }

    reports::print_statistics_table(&sweep);

    if let Some(path) = &args.json {
        export::write_json_sweep(&sweep, File::create(path)?)?;
        info!("💾 Wrote {}", path.display());
    }
    if let Some(path) = &args.csv {
        export::write_csv_sweep(&sweep, File::create(path)?)?;
        info!("💾 Wrote {}", path.display());
    }

    Ok(())
}
