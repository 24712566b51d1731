use serde::{Deserialize, Serialize};

use crate::HydroError;

/// Seawater, kg/m³.
pub const SEAWATER_DENSITY: f32 = 1029.0;
/// m/s².
pub const STANDARD_GRAVITY: f32 = 9.81;
/// Kinematic viscosity of water, m²/s.
pub const WATER_KINEMATIC_VISCOSITY: f32 = 1e-6;

/// Fluid properties shared by buoyancy and skin friction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterParams {
    pub density: f32,
    /// Magnitude of gravity; it acts along −Y.
    pub gravity: f32,
    pub kinematic_viscosity: f32,
    /// Length scale for the Reynolds number, meters.
    pub reference_length: f32,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            density: SEAWATER_DENSITY,
            gravity: STANDARD_GRAVITY,
            kinematic_viscosity: WATER_KINEMATIC_VISCOSITY,
            reference_length: 1.0,
        }
    }
}

impl WaterParams {
    pub fn validate(&self) -> Result<(), HydroError> {
        positive("density", self.density)?;
        positive("gravity", self.gravity)?;
        positive("kinematic_viscosity", self.kinematic_viscosity)?;
        positive("reference_length", self.reference_length)
    }
}

/// Empirical normal-pressure drag coefficients. No defaults: every hull needs
/// its own tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureDragParams {
    pub linear_pressure: f32,
    pub quadratic_pressure: f32,
    pub linear_suction: f32,
    pub quadratic_suction: f32,
    pub pressure_fall_off: f32,
    pub suction_fall_off: f32,
}

impl PressureDragParams {
    pub fn validate(&self) -> Result<(), HydroError> {
        finite("linear_pressure", self.linear_pressure)?;
        finite("quadratic_pressure", self.quadratic_pressure)?;
        finite("linear_suction", self.linear_suction)?;
        finite("quadratic_suction", self.quadratic_suction)?;
        finite("pressure_fall_off", self.pressure_fall_off)?;
        finite("suction_fall_off", self.suction_fall_off)
    }
}

/// Everything the force models need besides geometry and motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydroParams {
    #[serde(default)]
    pub water: WaterParams,
    pub pressure_drag: PressureDragParams,
}

impl HydroParams {
    pub fn new(pressure_drag: PressureDragParams) -> Self {
        Self {
            water: WaterParams::default(),
            pressure_drag,
        }
    }

    pub fn validate(&self) -> Result<(), HydroError> {
        self.water.validate()?;
        self.pressure_drag.validate()
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), HydroError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HydroError::InvalidParameter {
            name,
            reason: "must be finite",
        })
    }
}

pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), HydroError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(HydroError::InvalidParameter {
            name,
            reason: "must be positive",
        })
    }
}

pub mod presets {
    use super::*;

    // Small planing workboat, tuned by eye; fall-off < 1 softens large faces.
    pub fn workboat() -> PressureDragParams {
        PressureDragParams {
            linear_pressure: 10.0,
            quadratic_pressure: 10.0,
            linear_suction: 10.0,
            quadratic_suction: 10.0,
            pressure_fall_off: 0.5,
            suction_fall_off: 0.5,
        }
    }

    /// All coefficients zero; pressure drag contributes nothing.
    pub fn disabled() -> PressureDragParams {
        PressureDragParams {
            linear_pressure: 0.0,
            quadratic_pressure: 0.0,
            linear_suction: 0.0,
            quadratic_suction: 0.0,
            pressure_fall_off: 0.0,
            suction_fall_off: 0.0,
        }
    }
}
