use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use poseidon_io::write_csv_dir;
use poseidon_model::{generate_daily, smooth_series};
use poseidon_resample::{expand_all, validate_station_ids};

use crate::cli::GenerateArgs;
use crate::config::PoseidonConfig;
use crate::convert;

/// Run the full generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    // Step 1: Load config and apply CLI overrides
    let mut config = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ref output) = args.output {
        config.io.output_dir = output.clone();
    }

    // Step 2: Validate the run before any generation work
    let grid = convert::build_sample_grid(&config.run).context("invalid [run] settings")?;
    validate_station_ids(&config.run.stations).context("invalid station list")?;

    let params = convert::build_model_params(&config.model);
    let smoothing = convert::build_smoothing_config(&config.smoothing, config.model.noise_scale);
    let resample_cfg = convert::build_resample_config(&config.resample, config.model.noise_scale);
    resample_cfg.validate().context("invalid [resample] settings")?;
    let writer_cfg = convert::build_writer_config(&config.io, config.resample.decimals)
        .context("invalid [io] settings")?;
    writer_cfg.validate().context("invalid [io] settings")?;

    // Step 3: Create seeded RNG
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // Step 4: Daily series
    let n_days = grid.span().n_days();
    info!(
        start = %grid.span().start(),
        end = %grid.span().end(),
        n_days,
        seed = ?config.seed,
        "generating daily series"
    );
    let mut series = generate_daily(&params, n_days, &mut rng);

    // Step 5: Optional smoothing
    if let Some(ref cfg) = smoothing {
        series = smooth_series(&series, cfg);
        info!(passes = cfg.passes(), window = cfg.window(), "smoothing applied");
    }

    // Step 6: Per-station expansion
    let per_station = grid.n_samples();
    let total = per_station * config.run.stations.len();
    info!(
        n_stations = config.run.stations.len(),
        per_station, total, "expanding station series"
    );
    let stations = expand_all(
        &series,
        &grid,
        &config.run.stations,
        &resample_cfg,
        &mut rng,
        |emitted, total| debug!(emitted, total, "progress"),
    )
    .context("station expansion failed")?;

    // Step 7: CSV export
    let out_dir = &config.io.output_dir;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let rows: Vec<(String, Vec<_>)> = stations
        .iter()
        .map(|s| (s.id().to_string(), s.samples().to_vec()))
        .collect();
    let paths = write_csv_dir(out_dir, &config.io.base_name, &rows, &writer_cfg)
        .with_context(|| format!("failed to write CSV files to {}", out_dir.display()))?;

    for path in &paths {
        info!(path = %path.display(), "csv written");
    }
    info!(n_files = paths.len(), total_values = total, "generation complete");

    Ok(())
}

/// Reads and parses the TOML configuration file.
pub fn load_config(path: &Path) -> Result<PoseidonConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
