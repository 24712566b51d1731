use super::{ForceKind, ForceSample, HydrodynamicForce, MotionState};
use crate::{PressureDragParams, Triangle, DEGENERATE_AREA};

/// Empirical pressure/suction drag along face normals.
///
/// A face counts as pressure-facing when the angle between its two edges out
/// of `a` is acute and suction-facing when it is obtuse; a right angle gets
/// no force.
#[derive(Debug, Clone, Copy)]
pub struct PressureDrag {
    motion: MotionState,
    params: PressureDragParams,
}

impl PressureDrag {
    pub fn new(motion: MotionState, params: PressureDragParams) -> Self {
        Self { motion, params }
    }

    pub fn drag(&self, triangle: &Triangle) -> ForceSample {
        let facet = triangle.facet();
        let left = triangle.b - triangle.a;
        let right = triangle.c - triangle.a;
        let edge_product = left.length() * right.length();
        if !(facet.area > DEGENERATE_AREA) || !(edge_product > 0.0) {
            return ForceSample::zero(ForceKind::PressureDrag, facet.centroid);
        }

        let speed = self.motion.point_velocity(facet.centroid).length();
        let cosine = left.dot(right) / edge_product;
        let p = &self.params;
        let force = if cosine > 0.0 {
            let magnitude = p.linear_pressure * speed + p.quadratic_pressure * speed * speed;
            facet.normal * (-magnitude * facet.area.powf(1.0 + p.pressure_fall_off))
        } else if cosine < 0.0 {
            let magnitude = p.linear_suction * speed + p.quadratic_suction * speed * speed;
            facet.normal * (magnitude * facet.area.powf(1.0 + p.suction_fall_off))
        } else {
            crate::Vec3f::ZERO
        };
        ForceSample::new(ForceKind::PressureDrag, force, facet.centroid)
    }
}

impl HydrodynamicForce for PressureDrag {
    fn kind(&self) -> ForceKind {
        ForceKind::PressureDrag
    }

    fn calculate_force<'s>(
        &'s self,
        submerged: &'s [Triangle],
    ) -> impl Iterator<Item = ForceSample> + 's {
        submerged.iter().map(move |t| self.drag(t))
    }
}
