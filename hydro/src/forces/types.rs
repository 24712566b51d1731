use serde::{Deserialize, Serialize};

use crate::math::point_velocity;
use crate::Vec3f;

/// Which model produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceKind {
    Buoyancy,
    ViscousResistance,
    PressureDrag,
}

impl ForceKind {
    pub const ALL: [ForceKind; 3] = [
        ForceKind::Buoyancy,
        ForceKind::ViscousResistance,
        ForceKind::PressureDrag,
    ];
}

/// One force contribution, applied at a world-space point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    pub kind: ForceKind,
    pub force: Vec3f,
    pub origin: Vec3f,
}

impl ForceSample {
    pub const fn new(kind: ForceKind, force: Vec3f, origin: Vec3f) -> Self {
        Self {
            kind,
            force,
            origin,
        }
    }

    pub const fn zero(kind: ForceKind, origin: Vec3f) -> Self {
        Self::new(kind, Vec3f::ZERO, origin)
    }

    /// Moment of this force about `pivot`.
    #[inline]
    pub fn torque_about(&self, pivot: Vec3f) -> Vec3f {
        (self.origin - pivot).cross(self.force)
    }
}

/// Rigid-body motion captured at the start of a step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionState {
    pub linear_velocity: Vec3f,
    /// World frame, rad/s.
    pub angular_velocity: Vec3f,
    pub center_of_mass: Vec3f,
    /// Carried for hosts that integrate the forces; unused by the models.
    pub mass: f32,
}

impl MotionState {
    pub fn at_rest(center_of_mass: Vec3f) -> Self {
        Self {
            center_of_mass,
            ..Self::default()
        }
    }

    #[inline]
    pub fn point_velocity(&self, p: Vec3f) -> Vec3f {
        point_velocity(
            self.linear_velocity,
            self.angular_velocity,
            self.center_of_mass,
            p,
        )
    }
}

pub fn net_force(samples: &[ForceSample]) -> Vec3f {
    samples.iter().map(|s| s.force).sum()
}

pub fn net_force_of(samples: &[ForceSample], kind: ForceKind) -> Vec3f {
    samples
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.force)
        .sum()
}

pub fn net_torque(samples: &[ForceSample], pivot: Vec3f) -> Vec3f {
    samples.iter().map(|s| s.torque_about(pivot)).sum()
}

pub fn net_torque_of(samples: &[ForceSample], kind: ForceKind, pivot: Vec3f) -> Vec3f {
    samples
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.torque_about(pivot))
        .sum()
}
