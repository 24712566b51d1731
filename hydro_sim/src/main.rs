use anyhow::Result;
use clap::Parser;
use tracing::info;

use hydro_sim::{load_config, run, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(&args.config)?;
    args.apply_overrides(&mut cfg);
    info!(?cfg, "Scene config loaded");

    let report = run(&cfg)?;
    info!(
        steps = report.steps.len(),
        samples = report.samples,
        mean_buoyancy = ?report.mean_buoyancy(),
        final_position = ?report.final_pose.translation,
        "Run finished"
    );
    Ok(())
}
