//! Regular-grid approximation of the water surface under a hull.
//!
//! The grid has unit spacing and integer origin. Each cell is split along its
//! bottom-left → top-right diagonal into an upper-left and a lower-right
//! triangle; heights between samples are read off the supporting triangle's
//! plane.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::trace;

use crate::{HydroError, Vec3f, WaterSurface};

/// Plane normals with a smaller vertical component are treated as vertical.
const MIN_PLANE_NORMAL_Y: f32 = 1e-6;

/// Probes reach all the way down: water anywhere below the grid is found, so
/// a miss only happens when the probe starts under the surface or outside it.
const PROBE_REACH: f32 = f32::INFINITY;

#[derive(Debug)]
pub struct HeightField {
    x0: i32,
    z0: i32,
    width: usize,
    length: usize,
    top_y: f32,
    heights: Vec<f32>,
    // Memoized `height_at` results keyed by the query's (x, z) bit patterns.
    cache: Mutex<HashMap<(u32, u32), f32>>,
}

impl HeightField {
    /// Samples `surface` over the horizontal projection of `[min, max]`.
    ///
    /// Extent is `floor(min)..ceil(max)` on x and z (at least one cell per
    /// axis). Each grid vertex gets one downward ray from `ceil(max.y)`;
    /// misses fall back to that top bound, i.e. water standing at the top of
    /// the grid. The probe has unbounded reach, so a hull hovering over the
    /// water always sees it below.
    pub fn sample<S>(min: Vec3f, max: Vec3f, surface: &S) -> Self
    where
        S: WaterSurface + ?Sized,
    {
        let x0 = min.x.floor() as i32;
        let z0 = min.z.floor() as i32;
        let x1 = (max.x.ceil() as i32).max(x0 + 1);
        let z1 = (max.z.ceil() as i32).max(z0 + 1);
        let width = (x1 - x0) as usize;
        let length = (z1 - z0) as usize;

        let top_y = max.y.ceil();

        let mut heights = Vec::with_capacity((width + 1) * (length + 1));
        let mut misses = 0usize;
        for j in 0..=length {
            for i in 0..=width {
                let origin = Vec3f::new((x0 + i as i32) as f32, top_y, (z0 + j as i32) as f32);
                let y = match surface.raycast_down(origin, PROBE_REACH) {
                    Some(h) if h.is_finite() => h,
                    _ => {
                        misses += 1;
                        top_y
                    }
                };
                heights.push(y);
            }
        }
        trace!(x0, z0, width, length, top_y, misses, "sampled water heightfield");

        Self {
            x0,
            z0,
            width,
            length,
            top_y,
            heights,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Builds a grid from already-sampled heights, row-major by `i + j * (width + 1)`.
    pub fn from_heights(
        origin: (i32, i32),
        width: usize,
        length: usize,
        top_y: f32,
        heights: Vec<f32>,
    ) -> Result<Self, HydroError> {
        let expected = (width + 1) * (length + 1);
        if width == 0 || length == 0 || heights.len() != expected {
            return Err(HydroError::HeightSampleCount {
                width,
                length,
                expected,
                actual: heights.len(),
            });
        }
        let heights = heights
            .into_iter()
            .map(|h| if h.is_finite() { h } else { top_y })
            .collect();
        Ok(Self {
            x0: origin.0,
            z0: origin.1,
            width,
            length,
            top_y,
            heights,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn origin(&self) -> (i32, i32) {
        (self.x0, self.z0)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn top_y(&self) -> f32 {
        self.top_y
    }

    /// Sampled height at grid vertex `(i, j)` counted from the origin.
    pub fn vertex_height(&self, i: usize, j: usize) -> f32 {
        self.heights[self.index(i, j)]
    }

    /// Whether `(x, z)` lies inside the grid's horizontal extent (edges included).
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let lx = x - self.x0 as f32;
        let lz = z - self.z0 as f32;
        (0.0..=self.width as f32).contains(&lx) && (0.0..=self.length as f32).contains(&lz)
    }

    /// Number of distinct points queried so far.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Interpolated water height below `point`. Only `x` and `z` are used.
    pub fn height_at(&self, point: Vec3f) -> f32 {
        let key = (point.x.to_bits(), point.z.to_bits());
        *self
            .cache
            .lock()
            .entry(key)
            .or_insert_with(|| self.solve_height(point.x, point.z))
    }

    fn solve_height(&self, x: f32, z: f32) -> f32 {
        debug_assert!(
            self.contains(x, z),
            "height query ({x}, {z}) outside heightfield origin=({}, {}) size={}x{}",
            self.x0,
            self.z0,
            self.width,
            self.length
        );
        let lx = x - self.x0 as f32;
        let lz = z - self.z0 as f32;

        // Grid vertices return their sample untouched.
        if lx == lx.floor() && lz == lz.floor() && self.contains(x, z) {
            return self.vertex_height(lx as usize, lz as usize);
        }

        // Points on the far edge belong to the last cell.
        let ci = (lx.floor().max(0.0) as usize).min(self.width - 1);
        let cj = (lz.floor().max(0.0) as usize).min(self.length - 1);
        let fx = lx - ci as f32;
        let fz = lz - cj as f32;

        let a = self.vertex(ci, cj);
        let (b, c) = if fz > fx {
            // upper left: bottom-left, top-left, top-right
            (self.vertex(ci, cj + 1), self.vertex(ci + 1, cj + 1))
        } else {
            // lower right: bottom-left, top-right, bottom-right
            (self.vertex(ci + 1, cj + 1), self.vertex(ci + 1, cj))
        };

        let n = (b - a).cross(c - a);
        if n.y.abs() < MIN_PLANE_NORMAL_Y {
            return (a.y + b.y + c.y) / 3.0;
        }
        a.y - (n.x * (x - a.x) + n.z * (z - a.z)) / n.y
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i + j * (self.width + 1)
    }

    #[inline]
    fn vertex(&self, i: usize, j: usize) -> Vec3f {
        Vec3f::new(
            (self.x0 + i as i32) as f32,
            self.heights[self.index(i, j)],
            (self.z0 + j as i32) as f32,
        )
    }
}
