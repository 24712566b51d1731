//! Headless scene runner for the `hydro` force pipeline.
//!
//! Loads a hull, water and parameters from TOML, moves the hull along a
//! prescribed path and evaluates the hydrodynamic forces every fixed step.

use std::path::PathBuf;

use clap::Parser;

mod config;
pub use config::{load_config, parse_config, Config, HullConfig, MotionConfig, WaterConfig};

mod runner;
pub use runner::{run, run_with_observer, RunReport, StepSummary};

#[derive(Parser, Debug, Clone)]
#[command(name = "hydro-sim")]
#[command(about = "Headless hydrodynamics runner", long_about = None)]
pub struct Args {
    /// Scene config (TOML)
    #[arg(long, default_value = "hydro_sim/config/default.toml")]
    pub config: PathBuf,
    /// Override the configured number of steps
    #[arg(long)]
    pub steps: Option<usize>,
    /// Override the configured fixed timestep, seconds
    #[arg(long)]
    pub dt: Option<f32>,
}

impl Args {
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(steps) = self.steps {
            cfg.steps = steps;
        }
        if let Some(dt) = self.dt {
            cfg.dt = dt;
        }
    }
}
