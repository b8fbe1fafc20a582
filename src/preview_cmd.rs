use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use poseidon_model::{generate_daily, smooth_series};

use crate::cli::PreviewArgs;
use crate::convert;
use crate::generate::load_config;

/// Synthesize a daily curve and write it as `day,value` CSV.
pub fn run(args: PreviewArgs) -> Result<()> {
    let mut config = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let params = convert::build_model_params(&config.model);
    let smoothing = convert::build_smoothing_config(&config.smoothing, config.model.noise_scale);

    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    info!(days = args.days, seed = ?config.seed, "generating preview series");
    let mut series = generate_daily(&params, args.days, &mut rng);
    if let Some(ref cfg) = smoothing {
        series = smooth_series(&series, cfg);
    }

    let mut out = String::with_capacity(series.len() * 16);
    out.push_str("day,level\n");
    for (day, value) in series.as_slice().iter().enumerate() {
        out.push_str(&format!("{day},{value:.4}\n"));
    }

    let mut file = fs::File::create(&args.output)
        .with_context(|| format!("failed to create preview file: {}", args.output.display()))?;
    file.write_all(out.as_bytes())
        .with_context(|| format!("failed to write preview file: {}", args.output.display()))?;

    info!(path = %args.output.display(), n_days = series.len(), "preview written");
    Ok(())
}
