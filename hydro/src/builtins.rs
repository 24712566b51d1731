use crate::params::positive;
use crate::{HullMesh, HydroError, Vec3f};

// Pushes two triangles for a quad listed counter-clockwise as seen from outside.
fn quad(indices: &mut Vec<u32>, a: u32, b: u32, c: u32, d: u32) {
    indices.extend_from_slice(&[a, b, c, a, c, d]);
}

/// Closed box centred on the body origin. `size` is full extent per axis.
pub fn box_hull(size: Vec3f) -> Result<HullMesh, HydroError> {
    positive("size.x", size.x)?;
    positive("size.y", size.y)?;
    positive("size.z", size.z)?;
    let h = size * 0.5;
    let vertices = vec![
        Vec3f::new(-h.x, -h.y, -h.z),
        Vec3f::new(h.x, -h.y, -h.z),
        Vec3f::new(h.x, h.y, -h.z),
        Vec3f::new(-h.x, h.y, -h.z),
        Vec3f::new(-h.x, -h.y, h.z),
        Vec3f::new(h.x, -h.y, h.z),
        Vec3f::new(h.x, h.y, h.z),
        Vec3f::new(-h.x, h.y, h.z),
    ];
    let mut indices = Vec::with_capacity(36);
    quad(&mut indices, 0, 1, 5, 4); // bottom
    quad(&mut indices, 3, 7, 6, 2); // top
    quad(&mut indices, 0, 3, 2, 1); // −Z
    quad(&mut indices, 4, 5, 6, 7); // +Z
    quad(&mut indices, 0, 4, 7, 3); // −X
    quad(&mut indices, 1, 2, 6, 5); // +X
    HullMesh::new(vertices, indices)
}

/// V-section prism running along Z: flat deck at y = 0, keel at y = −draft.
pub fn wedge_hull(length: f32, beam: f32, draft: f32) -> Result<HullMesh, HydroError> {
    positive("length", length)?;
    positive("beam", beam)?;
    positive("draft", draft)?;
    let hl = 0.5 * length;
    let hb = 0.5 * beam;
    let vertices = vec![
        Vec3f::new(-hb, 0.0, -hl),
        Vec3f::new(hb, 0.0, -hl),
        Vec3f::new(0.0, -draft, -hl),
        Vec3f::new(-hb, 0.0, hl),
        Vec3f::new(hb, 0.0, hl),
        Vec3f::new(0.0, -draft, hl),
    ];
    let mut indices = Vec::with_capacity(24);
    quad(&mut indices, 0, 3, 4, 1); // deck
    quad(&mut indices, 0, 2, 5, 3); // port
    quad(&mut indices, 1, 4, 5, 2); // starboard
    indices.extend_from_slice(&[0, 1, 2]); // −Z cap
    indices.extend_from_slice(&[3, 5, 4]); // +Z cap
    HullMesh::new(vertices, indices)
}
