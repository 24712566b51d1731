//! Splits hull triangles into the parts that lie below the water surface.
//!
//! Depths are signed per vertex: `h = y_world − water_height`, so `h <= 0`
//! is wet. Partially wet triangles are cut along the line where linearly
//! interpolated depth crosses zero, which keeps submerged area continuous as
//! a vertex moves through the surface.

use crate::{HeightField, HullMesh, HullPose, Triangle, Vec3f};

/// Per-step result of classifying a hull against a heightfield.
#[derive(Debug, Clone, Default)]
pub struct SubmergedSet {
    pub world_vertices: Vec<Vec3f>,
    pub depths: Vec<f32>,
    /// Fully submerged triangles in hull order; clipped pieces keep the
    /// winding of the triangle they came from.
    pub triangles: Vec<Triangle>,
}

impl SubmergedSet {
    pub fn submerged_vertex_count(&self) -> usize {
        self.depths.iter().filter(|&&h| h <= 0.0).count()
    }

    pub fn area(&self) -> f32 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

/// Signed depth of every world-space vertex relative to the water below it.
pub fn vertex_depths(world_vertices: &[Vec3f], heightfield: &HeightField) -> Vec<f32> {
    world_vertices
        .iter()
        .map(|&v| v.y - heightfield.height_at(v))
        .collect()
}

/// Transforms `mesh` by `pose` and returns its submerged geometry.
pub fn classify(mesh: &HullMesh, pose: &HullPose, heightfield: &HeightField) -> SubmergedSet {
    classify_transformed(mesh, pose.world_vertices(mesh), heightfield)
}

/// Like [`classify`] for callers that already hold the world-space vertices.
pub fn classify_transformed(
    mesh: &HullMesh,
    world_vertices: Vec<Vec3f>,
    heightfield: &HeightField,
) -> SubmergedSet {
    debug_assert_eq!(world_vertices.len(), mesh.vertices().len());
    let depths = vertex_depths(&world_vertices, heightfield);
    let mut triangles = Vec::with_capacity(mesh.triangle_count());
    for [i0, i1, i2] in mesh.triangles() {
        clip_triangle(
            [world_vertices[i0], world_vertices[i1], world_vertices[i2]],
            [depths[i0], depths[i1], depths[i2]],
            &mut triangles,
        );
    }
    SubmergedSet {
        world_vertices,
        depths,
        triangles,
    }
}

/// Appends the submerged part of one triangle to `out`.
///
/// Emits the triangle itself when fully wet, two pieces when one vertex is
/// dry, one piece when one vertex is wet, and nothing when all are dry.
/// Degenerate pieces are skipped.
pub fn clip_triangle(vertices: [Vec3f; 3], depths: [f32; 3], out: &mut Vec<Triangle>) {
    // Highest (driest) first; stable so ties keep winding order.
    let mut order = [0usize, 1, 2];
    order.sort_by(|&l, &r| depths[r].total_cmp(&depths[l]));

    if depths[order[0]] <= 0.0 {
        push_nondegenerate(out, Triangle::new(vertices[0], vertices[1], vertices[2]));
    } else if depths[order[1]] <= 0.0 {
        //   high
        //   /  \
        // left--right
        let high = order[0];
        let right = (high + 1) % 3;
        let left = (high + 2) % 3;
        let new_right = zero_crossing(vertices[high], depths[high], vertices[right], depths[right]);
        let new_left = zero_crossing(vertices[high], depths[high], vertices[left], depths[left]);
        push_nondegenerate(out, Triangle::new(vertices[right], new_left, new_right));
        push_nondegenerate(out, Triangle::new(vertices[left], new_left, vertices[right]));
    } else if depths[order[2]] <= 0.0 {
        // right--left
        //   \  /
        //   low
        let low = order[2];
        let left = (low + 1) % 3;
        let right = (low + 2) % 3;
        let new_left = zero_crossing(vertices[left], depths[left], vertices[low], depths[low]);
        let new_right = zero_crossing(vertices[right], depths[right], vertices[low], depths[low]);
        push_nondegenerate(out, Triangle::new(vertices[low], new_left, new_right));
    }
}

/// Point on `far → near` where linearly interpolated depth is zero.
/// `h_far` and `h_near` must have opposite signs (or `h_near == 0`).
#[inline]
pub fn zero_crossing(far: Vec3f, h_far: f32, near: Vec3f, h_near: f32) -> Vec3f {
    let t = -h_far / (h_near - h_far);
    far + (near - far) * t
}

#[inline]
fn push_nondegenerate(out: &mut Vec<Triangle>, tri: Triangle) {
    if !tri.is_degenerate() {
        out.push(tri);
    }
}
