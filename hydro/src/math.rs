pub use bevy_math::{Quat as Quatf, Vec3 as Vec3f};
use serde::{Deserialize, Serialize};

/// Triangles at or below this area carry no force and are dropped by clipping.
pub const DEGENERATE_AREA: f32 = 1e-9;

/// Ordered triple of world-space points.
///
/// Winding matters: `cross(b - a, c - a)` is expected to point out of the hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec3f,
    pub b: Vec3f,
    pub c: Vec3f,
}

/// Derived per-triangle quantities shared by every force model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub centroid: Vec3f,
    pub normal: Vec3f,
    pub area: f32,
}

impl Triangle {
    pub const fn new(a: Vec3f, b: Vec3f, c: Vec3f) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec3f; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn centroid(&self) -> Vec3f {
        (self.a + self.b + self.c) / 3.0
    }

    /// Unnormalized face normal, twice the area in length.
    #[inline]
    pub fn cross(&self) -> Vec3f {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Unit outward normal; zero for degenerate triangles.
    #[inline]
    pub fn normal(&self) -> Vec3f {
        self.cross().normalize_or_zero()
    }

    #[inline]
    pub fn area(&self) -> f32 {
        0.5 * self.cross().length()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.area() > DEGENERATE_AREA)
    }

    pub fn facet(&self) -> Facet {
        let cross = self.cross();
        Facet {
            centroid: self.centroid(),
            normal: cross.normalize_or_zero(),
            area: 0.5 * cross.length(),
        }
    }
}

/// Velocity of a point `p` on a rigid body: `v + ω × (p − com)`.
#[inline]
pub fn point_velocity(linear: Vec3f, angular: Vec3f, center_of_mass: Vec3f, p: Vec3f) -> Vec3f {
    linear + angular.cross(p - center_of_mass)
}
