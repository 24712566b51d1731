use super::{ForceKind, ForceSample, HydrodynamicForce};
use crate::{HeightField, Triangle, WaterParams, DEGENERATE_AREA};

/// Hydrostatic pressure integrated per triangle: pressure at the centroid's
/// depth times area, along the face normal.
#[derive(Debug, Clone, Copy)]
pub struct Buoyancy<'a> {
    heightfield: &'a HeightField,
    water: WaterParams,
}

impl<'a> Buoyancy<'a> {
    pub fn new(heightfield: &'a HeightField, water: WaterParams) -> Self {
        Self { heightfield, water }
    }

    /// Force on one fully submerged triangle. Points must be wound so the
    /// normal faces out of the hull.
    pub fn hydrostatic_force(&self, triangle: &Triangle) -> ForceSample {
        let facet = triangle.facet();
        if !(facet.area > DEGENERATE_AREA) {
            return ForceSample::zero(ForceKind::Buoyancy, facet.centroid);
        }
        let depth = facet.centroid.y - self.heightfield.height_at(facet.centroid);
        let gravity_y = -self.water.gravity;
        let force = facet.normal * (-self.water.density * gravity_y * depth * facet.area);
        ForceSample::new(ForceKind::Buoyancy, force, facet.centroid)
    }
}

impl HydrodynamicForce for Buoyancy<'_> {
    fn kind(&self) -> ForceKind {
        ForceKind::Buoyancy
    }

    fn calculate_force<'s>(
        &'s self,
        submerged: &'s [Triangle],
    ) -> impl Iterator<Item = ForceSample> + 's {
        submerged.iter().map(move |t| self.hydrostatic_force(t))
    }
}
