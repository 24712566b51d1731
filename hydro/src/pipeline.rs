//! One fixed-step evaluation of all hydrodynamic forces on a hull.

use tracing::{debug_span, trace};

use crate::forces::{
    net_force, net_torque, Buoyancy, ForceSample, HydrodynamicForce, MotionState, PressureDrag,
    ViscousWaterResistance,
};
use crate::hull::bounds;
use crate::submersion::classify_transformed;
use crate::{HeightField, HullMesh, HullPose, HydroParams, Vec3f, WaterSurface};

/// Step-start snapshot of everything the pipeline reads.
#[derive(Debug, Clone, Copy)]
pub struct StepInput<'a> {
    pub mesh: &'a HullMesh,
    pub pose: &'a HullPose,
    pub motion: &'a MotionState,
    pub params: &'a HydroParams,
}

/// Per-step telemetry, filled by [`step_hydrodynamics_dbg`] on request.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDebug {
    // Heightfield
    pub grid_width: usize,
    pub grid_length: usize,
    pub grid_top_y: f32,
    pub height_queries: usize,
    // Submersion
    pub hull_vertices: usize,
    pub submerged_vertices: usize,
    pub hull_triangles: usize,
    pub submerged_triangles: usize,
    pub submerged_area: f32,
    // Skin friction
    pub reynolds: f32,
    pub resistance_coefficient: f32,
    // Net per model (torques about the centre of mass)
    pub buoyancy_force: Vec3f,
    pub buoyancy_torque: Vec3f,
    pub viscous_force: Vec3f,
    pub viscous_torque: Vec3f,
    pub pressure_drag_force: Vec3f,
    pub pressure_drag_torque: Vec3f,
}

impl StepDebug {
    pub fn total_force(&self) -> Vec3f {
        self.buoyancy_force + self.viscous_force + self.pressure_drag_force
    }

    pub fn total_torque(&self) -> Vec3f {
        self.buoyancy_torque + self.viscous_torque + self.pressure_drag_torque
    }
}

/// Computes every force sample for one step: buoyancy first, then viscous
/// resistance, then pressure drag, one sample per submerged triangle each.
pub fn step_hydrodynamics<S>(input: StepInput<'_>, surface: &S) -> Vec<ForceSample>
where
    S: WaterSurface + ?Sized,
{
    step_hydrodynamics_dbg(input, surface, None, None)
}

/// Variant of [`step_hydrodynamics`] that optionally fills telemetry and
/// reports each finished sample to `observer`.
pub fn step_hydrodynamics_dbg<S>(
    input: StepInput<'_>,
    surface: &S,
    dbg: Option<&mut StepDebug>,
    observer: Option<&mut dyn FnMut(&ForceSample)>,
) -> Vec<ForceSample>
where
    S: WaterSurface + ?Sized,
{
    let span = debug_span!("hydro_step", triangles = input.mesh.triangle_count());
    let _enter = span.enter();

    let world_vertices = input.pose.world_vertices(input.mesh);
    let Some((min, max)) = bounds(&world_vertices) else {
        return Vec::new();
    };
    // Fresh grid (and height cache) every step; the surface may have moved.
    let heightfield = HeightField::sample(min, max, surface);
    let submerged = classify_transformed(input.mesh, world_vertices, &heightfield);
    let triangles = &submerged.triangles;

    let buoyancy = Buoyancy::new(&heightfield, input.params.water);
    let viscous = ViscousWaterResistance::new(*input.motion, input.params.water);
    let pressure_drag = PressureDrag::new(*input.motion, input.params.pressure_drag);

    let n = triangles.len();
    let mut samples = Vec::with_capacity(3 * n);
    samples.extend(buoyancy.calculate_force(triangles));
    samples.extend(viscous.calculate_force(triangles));
    samples.extend(pressure_drag.calculate_force(triangles));

    let com = input.motion.center_of_mass;
    let (buoy, rest) = samples.split_at(n);
    let (visc, drag) = rest.split_at(n);
    let buoyancy_force = net_force(buoy);
    let viscous_force = net_force(visc);
    let pressure_drag_force = net_force(drag);
    trace!(kind = ?buoyancy.kind(), force = ?buoyancy_force, "model evaluated");
    trace!(
        kind = ?viscous.kind(),
        force = ?viscous_force,
        reynolds = viscous.reynolds(),
        cf = viscous.resistance_coefficient(),
        "model evaluated"
    );
    trace!(kind = ?pressure_drag.kind(), force = ?pressure_drag_force, "model evaluated");

    if let Some(d) = dbg {
        d.grid_width = heightfield.width();
        d.grid_length = heightfield.length();
        d.grid_top_y = heightfield.top_y();
        d.height_queries = heightfield.cache_len();
        d.hull_vertices = submerged.world_vertices.len();
        d.submerged_vertices = submerged.submerged_vertex_count();
        d.hull_triangles = input.mesh.triangle_count();
        d.submerged_triangles = n;
        d.submerged_area = submerged.area();
        d.reynolds = viscous.reynolds();
        d.resistance_coefficient = viscous.resistance_coefficient();
        d.buoyancy_force = buoyancy_force;
        d.buoyancy_torque = net_torque(buoy, com);
        d.viscous_force = viscous_force;
        d.viscous_torque = net_torque(visc, com);
        d.pressure_drag_force = pressure_drag_force;
        d.pressure_drag_torque = net_torque(drag, com);
    }

    if let Some(observer) = observer {
        for sample in &samples {
            observer(sample);
        }
    }

    samples
}
