//! Vertical height queries against a water surface.
//!
//! The core only ever asks one question of the water: cast a ray straight
//! down from a point and report the surface height it hits, if any.

use serde::{Deserialize, Serialize};

use crate::Vec3f;

pub trait WaterSurface {
    /// Height of the first surface hit by a ray cast straight down from
    /// `origin`, or `None` if nothing lies within `max_distance`.
    /// `max_distance` may be infinite.
    fn raycast_down(&self, origin: Vec3f, max_distance: f32) -> Option<f32>;
}

impl<F> WaterSurface for F
where
    F: Fn(Vec3f, f32) -> Option<f32>,
{
    fn raycast_down(&self, origin: Vec3f, max_distance: f32) -> Option<f32> {
        self(origin, max_distance)
    }
}

#[inline]
fn within_ray(origin: Vec3f, max_distance: f32, height: f32) -> Option<f32> {
    (height <= origin.y && height >= origin.y - max_distance).then_some(height)
}

/// Unbounded calm water at a fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatWater {
    pub level: f32,
}

impl FlatWater {
    pub const fn new(level: f32) -> Self {
        Self { level }
    }
}

impl Default for FlatWater {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl WaterSurface for FlatWater {
    fn raycast_down(&self, origin: Vec3f, max_distance: f32) -> Option<f32> {
        within_ray(origin, max_distance, self.level)
    }
}

/// Rectangular patch of travelling swell centred on the world origin:
/// `y = amplitude · sin(time + x − z/2)`. Rays outside the patch miss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SineSwell {
    pub amplitude: f32,
    pub time: f32,
    pub half_width: f32,
    pub half_length: f32,
}

impl Default for SineSwell {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            time: 0.0,
            half_width: 50.0,
            half_length: 50.0,
        }
    }
}

impl SineSwell {
    pub fn height(&self, x: f32, z: f32) -> f32 {
        self.amplitude * (self.time + x - 0.5 * z).sin()
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        x.abs() <= self.half_width && z.abs() <= self.half_length
    }

    pub fn at_time(self, time: f32) -> Self {
        Self { time, ..self }
    }
}

impl WaterSurface for SineSwell {
    fn raycast_down(&self, origin: Vec3f, max_distance: f32) -> Option<f32> {
        if !self.contains(origin.x, origin.z) {
            return None;
        }
        within_ray(origin, max_distance, self.height(origin.x, origin.z))
    }
}
