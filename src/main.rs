use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod tax;

#[derive(Parser, Debug)]
#[command(
    name = "taxin",
    version,
    about = "Indian personal income tax calculator for the old and new regimes (AY 2026-27)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the tax liability for a single regime
    Compute(cmd::compute::ComputeCommand),
    /// Compare the liability across both regimes
    Compare(cmd::compare::CompareCommand),
    /// Compute liabilities for scenarios from a CSV file
    Batch(cmd::batch::BatchCommand),
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute(cmd) => cmd.exec(),
        Command::Compare(cmd) => cmd.exec(),
        Command::Batch(cmd) => cmd.exec(),
    }
}
