use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hydro::{
    step_hydrodynamics_dbg, ForceSample, HullPose, MotionState, Quatf, StepDebug, StepInput, Vec3f,
};

use crate::Config;

/// Per-step totals, forces in newtons and torques about the centre of mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    pub step: usize,
    pub time: f32,
    pub submerged_triangles: usize,
    pub submerged_area: f32,
    pub buoyancy: Vec3f,
    pub viscous: Vec3f,
    pub pressure_drag: Vec3f,
    pub torque: Vec3f,
}

impl StepSummary {
    pub fn total_force(&self) -> Vec3f {
        self.buoyancy + self.viscous + self.pressure_drag
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub steps: Vec<StepSummary>,
    /// Force samples produced over the whole run.
    pub samples: usize,
    pub final_pose: HullPose,
}

impl RunReport {
    pub fn last(&self) -> Option<&StepSummary> {
        self.steps.last()
    }

    pub fn mean_buoyancy(&self) -> Vec3f {
        if self.steps.is_empty() {
            return Vec3f::ZERO;
        }
        self.steps.iter().map(|s| s.buoyancy).sum::<Vec3f>() / self.steps.len() as f32
    }
}

pub fn run(cfg: &Config) -> Result<RunReport> {
    run_with_observer(cfg, |_, _| {})
}

/// Runs the scene and hands each step's samples to `on_step`.
///
/// The hull is carried kinematically at the configured velocities; the
/// computed forces are reported, not integrated.
pub fn run_with_observer<F>(cfg: &Config, mut on_step: F) -> Result<RunReport>
where
    F: FnMut(usize, &[ForceSample]),
{
    cfg.validate()?;
    let mesh = cfg.hull.build().context("building hull mesh")?;

    let mut pose = cfg.pose;
    let mut time = 0.0f32;
    let mut steps = Vec::with_capacity(cfg.steps);
    let mut total_samples = 0usize;

    for step in 0..cfg.steps {
        let surface = cfg.water.surface_at(time);
        let motion = MotionState {
            linear_velocity: cfg.motion.linear_velocity,
            angular_velocity: cfg.motion.angular_velocity,
            center_of_mass: pose.transform_point(cfg.motion.center_of_mass),
            mass: cfg.motion.mass,
        };
        let input = StepInput {
            mesh: &mesh,
            pose: &pose,
            motion: &motion,
            params: &cfg.params,
        };

        let mut dbg = StepDebug::default();
        let samples = step_hydrodynamics_dbg(input, &*surface, Some(&mut dbg), None);
        total_samples += samples.len();

        let summary = StepSummary {
            step,
            time,
            submerged_triangles: dbg.submerged_triangles,
            submerged_area: dbg.submerged_area,
            buoyancy: dbg.buoyancy_force,
            viscous: dbg.viscous_force,
            pressure_drag: dbg.pressure_drag_force,
            torque: dbg.total_torque(),
        };
        info!(
            step,
            time,
            submerged = summary.submerged_triangles,
            buoyancy = ?summary.buoyancy,
            viscous = ?summary.viscous,
            pressure_drag = ?summary.pressure_drag,
            "hydro step"
        );
        debug!(
            grid = ?(dbg.grid_width, dbg.grid_length),
            height_queries = dbg.height_queries,
            reynolds = dbg.reynolds,
            cf = dbg.resistance_coefficient,
            torque = ?summary.torque,
            "step detail"
        );
        on_step(step, &samples);
        steps.push(summary);

        advance_pose(&mut pose, &motion, cfg.dt);
        time += cfg.dt;
    }

    Ok(RunReport {
        steps,
        samples: total_samples,
        final_pose: pose,
    })
}

/// Carries the pose along at constant velocity, rotating about the
/// centre of mass.
fn advance_pose(pose: &mut HullPose, motion: &MotionState, dt: f32) {
    let spin = Quatf::from_scaled_axis(motion.angular_velocity * dt);
    let com = motion.center_of_mass;
    pose.translation = com + spin * (pose.translation - com) + motion.linear_velocity * dt;
    pose.rotation = (spin * pose.rotation).normalize();
}
