use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use hydro::builtins::{box_hull, wedge_hull};
use hydro::{
    FlatWater, HullMesh, HullPose, HydroError, HydroParams, SineSwell, Vec3f, WaterSurface,
};

/// A full scene: hull, starting pose, prescribed motion, water and the
/// force-model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default = "default_steps")]
    pub steps: usize,
    pub hull: HullConfig,
    #[serde(default)]
    pub pose: HullPose,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub water: WaterConfig,
    pub params: HydroParams,
}

fn default_dt() -> f32 {
    1.0 / 30.0
}

fn default_steps() -> usize {
    60
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.dt.is_finite() && self.dt > 0.0,
            "dt must be positive, got {}",
            self.dt
        );
        self.hull.build().context("invalid hull")?;
        self.pose.validate().context("invalid hull pose")?;
        self.params.validate().context("invalid hydro params")?;
        self.water.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HullConfig {
    Box { size: Vec3f },
    Wedge { length: f32, beam: f32, draft: f32 },
}

impl HullConfig {
    pub fn build(&self) -> Result<HullMesh, HydroError> {
        match *self {
            HullConfig::Box { size } => box_hull(size),
            HullConfig::Wedge {
                length,
                beam,
                draft,
            } => wedge_hull(length, beam, draft),
        }
    }
}

/// Constant velocities the hull is carried along with. The centre of mass
/// is given in the body frame and follows the pose.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub linear_velocity: Vec3f,
    pub angular_velocity: Vec3f,
    pub center_of_mass: Vec3f,
    pub mass: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaterConfig {
    Flat {
        level: f32,
    },
    Swell {
        amplitude: f32,
        half_width: f32,
        half_length: f32,
    },
}

impl Default for WaterConfig {
    fn default() -> Self {
        WaterConfig::Flat { level: 0.0 }
    }
}

impl WaterConfig {
    fn validate(&self) -> Result<()> {
        match *self {
            WaterConfig::Flat { level } => {
                ensure!(level.is_finite(), "water level must be finite");
            }
            WaterConfig::Swell {
                amplitude,
                half_width,
                half_length,
            } => {
                ensure!(amplitude.is_finite(), "swell amplitude must be finite");
                ensure!(
                    half_width > 0.0 && half_length > 0.0,
                    "swell patch must have a positive extent"
                );
            }
        }
        Ok(())
    }

    /// The water surface as it stands at `time` seconds into the run.
    pub fn surface_at(&self, time: f32) -> Box<dyn WaterSurface> {
        match *self {
            WaterConfig::Flat { level } => Box::new(FlatWater::new(level)),
            WaterConfig::Swell {
                amplitude,
                half_width,
                half_length,
            } => Box::new(SineSwell {
                amplitude,
                time,
                half_width,
                half_length,
            }),
        }
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text).context("parsing scene config")?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading config {}", path.display()))
}
