use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Poseidon stochastic groundwater-level generator.
#[derive(Parser)]
#[command(
    name = "poseidon",
    version,
    about = "Stochastic groundwater-level series generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full generation pipeline and export per-station CSV files.
    Generate(GenerateArgs),
    /// Synthesize a daily curve and write it as a two-column CSV.
    Preview(PreviewArgs),
    /// Print sample counts for the configured run without generating.
    Estimate(EstimateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "poseidon.toml")]
    pub config: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `preview` subcommand.
#[derive(clap::Args)]
pub struct PreviewArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "poseidon.toml")]
    pub config: PathBuf,

    /// Number of days to synthesize.
    #[arg(short, long, default_value_t = 1000)]
    pub days: usize,

    /// Path for the preview CSV output.
    #[arg(short, long, default_value = "preview.csv")]
    pub output: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "poseidon.toml")]
    pub config: PathBuf,
}
