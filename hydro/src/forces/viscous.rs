use super::{ForceKind, ForceSample, HydrodynamicForce, MotionState};
use crate::{Triangle, WaterParams, DEGENERATE_AREA};

/// Hull speeds below this (m/s) produce no skin friction.
pub const MIN_FLOW_SPEED: f32 = 1e-3;
/// Below this the ITTC-1957 line is outside its range and blows up near Re = 100.
pub const MIN_REYNOLDS: f32 = 1e3;

#[inline]
pub fn reynolds_number(speed: f32, length: f32, viscosity: f32) -> f32 {
    speed * length / viscosity
}

/// ITTC-1957 flat-plate friction line, `C_F = 0.075 / (log10 Re − 2)²`.
#[inline]
pub fn reference_resistance_coefficient(reynolds: f32) -> f32 {
    let d = reynolds.log10() - 2.0;
    0.075 / (d * d)
}

/// Skin-friction drag tangential to each submerged face.
#[derive(Debug, Clone, Copy)]
pub struct ViscousWaterResistance {
    motion: MotionState,
    water: WaterParams,
    reynolds: f32,
    resistance_coefficient: f32,
}

impl ViscousWaterResistance {
    pub fn new(motion: MotionState, water: WaterParams) -> Self {
        let speed = motion.linear_velocity.length();
        let reynolds = reynolds_number(speed, water.reference_length, water.kinematic_viscosity);
        let resistance_coefficient = if speed < MIN_FLOW_SPEED || !(reynolds >= MIN_REYNOLDS) {
            0.0
        } else {
            reference_resistance_coefficient(reynolds)
        };
        Self {
            motion,
            water,
            reynolds,
            resistance_coefficient,
        }
    }

    pub fn reynolds(&self) -> f32 {
        self.reynolds
    }

    /// `C_F` for this step; zero when the hull is effectively at rest.
    pub fn resistance_coefficient(&self) -> f32 {
        self.resistance_coefficient
    }

    pub fn drag(&self, triangle: &Triangle) -> ForceSample {
        let facet = triangle.facet();
        if self.resistance_coefficient == 0.0 || !(facet.area > DEGENERATE_AREA) {
            return ForceSample::zero(ForceKind::ViscousResistance, facet.centroid);
        }
        let point_velocity = self.motion.point_velocity(facet.centroid);
        let point_speed = point_velocity.length();
        // (v × n) × n is minus the tangential part of v: drag opposes the slip.
        let flow_direction = point_velocity
            .cross(facet.normal)
            .cross(facet.normal)
            .normalize_or_zero();
        let flow_velocity = flow_direction * point_speed;
        let drag = flow_velocity
            * (0.5 * self.water.density * self.resistance_coefficient * facet.area * point_speed);
        ForceSample::new(ForceKind::ViscousResistance, drag, facet.centroid)
    }
}

impl HydrodynamicForce for ViscousWaterResistance {
    fn kind(&self) -> ForceKind {
        ForceKind::ViscousResistance
    }

    fn calculate_force<'s>(
        &'s self,
        submerged: &'s [Triangle],
    ) -> impl Iterator<Item = ForceSample> + 's {
        submerged.iter().map(move |t| self.drag(t))
    }
}
