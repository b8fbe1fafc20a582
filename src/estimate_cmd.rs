use anyhow::{Context, Result};

use poseidon_resample::validate_station_ids;

use crate::cli::EstimateArgs;
use crate::convert;
use crate::generate::load_config;

/// Print the counts a `generate` run with this config would produce.
///
/// Uses the same span/grid computations as `generate`, so the printed
/// numbers always match the exported files.
pub fn run(args: EstimateArgs) -> Result<()> {
    let config = load_config(&args.config)?;

    let grid = convert::build_sample_grid(&config.run).context("invalid [run] settings")?;
    validate_station_ids(&config.run.stations).context("invalid station list")?;

    let n_days = grid.span().n_days();
    let per_station = grid.n_samples();
    let n_stations = config.run.stations.len();

    println!("span:                {} .. {}", grid.span().start(), grid.span().end());
    println!("days:                {n_days}");
    println!("interval:            {} h", grid.interval_hours());
    println!("stations:            {n_stations}");
    println!("samples per station: {per_station}");
    println!("total values:        {}", per_station * n_stations);

    Ok(())
}
