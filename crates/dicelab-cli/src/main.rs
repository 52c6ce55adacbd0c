use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod charts;
mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every distribution and render every chart in one pass.
    Run(cmd::run::RunArgs),
    /// Print sum distributions to the console.
    Report(cmd::report::ReportArgs),
    /// Render distribution charts to PNG files.
    Chart(cmd::chart::ChartArgs),
    /// Cross-check the exact distribution against random rolls.
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let outcome = match cli.command {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Report(args) => cmd::report::run(args),
        Commands::Chart(args) => cmd::chart::run(args),
        Commands::Simulate(args) => cmd::simulate::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
