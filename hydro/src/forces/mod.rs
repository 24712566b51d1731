mod buoyancy;
mod pressure_drag;
mod types;
mod viscous;

pub use buoyancy::Buoyancy;
pub use pressure_drag::PressureDrag;
pub use types::{
    net_force, net_force_of, net_torque, net_torque_of, ForceKind, ForceSample, MotionState,
};
pub use viscous::{
    reference_resistance_coefficient, reynolds_number, ViscousWaterResistance, MIN_FLOW_SPEED,
    MIN_REYNOLDS,
};

use crate::Triangle;

/// A hydrodynamic force model evaluated over submerged triangles.
///
/// Implementations yield exactly one sample per input triangle, lazily and in
/// input order. Degenerate triangles yield a zero force at their centroid.
pub trait HydrodynamicForce {
    fn kind(&self) -> ForceKind;

    fn calculate_force<'s>(
        &'s self,
        submerged: &'s [Triangle],
    ) -> impl Iterator<Item = ForceSample> + 's;
}
