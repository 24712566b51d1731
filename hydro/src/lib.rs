//! Hydrodynamic forces on a triangulated hull floating in a sampled water
//! surface.
//!
//! Each fixed step samples a small heightfield under the hull, clips the hull
//! against it and evaluates buoyancy, skin friction and pressure drag over the
//! submerged triangles. The result is a flat list of `(force, origin)` samples
//! for the host's rigid-body integrator. Nothing here integrates motion.

mod math;
pub use math::{point_velocity, Facet, Quatf, Triangle, Vec3f, DEGENERATE_AREA};

mod error;
pub use error::HydroError;

pub mod surface;
pub use surface::{FlatWater, SineSwell, WaterSurface};

pub mod heightfield;
pub use heightfield::HeightField;

mod hull;
pub use hull::{bounds, HullMesh, HullPose};

pub mod submersion;
pub use submersion::{classify, clip_triangle, SubmergedSet};

pub mod forces;
pub use forces::{
    net_force, net_force_of, net_torque, net_torque_of, Buoyancy, ForceKind, ForceSample,
    HydrodynamicForce, MotionState, PressureDrag, ViscousWaterResistance,
};

mod params;
pub use params::presets;
pub use params::{
    HydroParams, PressureDragParams, WaterParams, SEAWATER_DENSITY, STANDARD_GRAVITY,
    WATER_KINEMATIC_VISCOSITY,
};

pub mod builtins;

pub mod pipeline;
pub use pipeline::{step_hydrodynamics, step_hydrodynamics_dbg, StepDebug, StepInput};
