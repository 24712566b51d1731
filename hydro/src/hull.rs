use serde::{Deserialize, Serialize};

use crate::params::positive;
use crate::{HydroError, Quatf, Vec3f};

/// Triangulated hull in its body-local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HullMesh {
    vertices: Vec<Vec3f>,
    indices: Vec<u32>,
}

impl HullMesh {
    /// `indices` is a flat list of triangles, stride 3, wound so that
    /// `cross(b - a, c - a)` points out of the hull.
    pub fn new(vertices: Vec<Vec3f>, indices: Vec<u32>) -> Result<Self, HydroError> {
        if indices.is_empty() {
            return Err(HydroError::EmptyMesh);
        }
        if indices.len() % 3 != 0 {
            return Err(HydroError::RaggedIndices(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(HydroError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        if let Some(bad) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(HydroError::NonFiniteVertex(bad));
        }
        Ok(Self { vertices, indices })
    }

    pub fn vertices(&self) -> &[Vec3f] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex index triples, one per triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
    }
}

/// Body-local → world transform: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullPose {
    pub translation: Vec3f,
    pub rotation: Quatf,
    pub scale: Vec3f,
}

impl Default for HullPose {
    fn default() -> Self {
        Self {
            translation: Vec3f::ZERO,
            rotation: Quatf::IDENTITY,
            scale: Vec3f::ONE,
        }
    }
}

impl HullPose {
    pub fn from_translation(translation: Vec3f) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_rotation(self, rotation: Quatf) -> Self {
        Self { rotation, ..self }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec3f) -> Vec3f {
        self.rotation * (self.scale * p) + self.translation
    }

    pub fn world_vertices(&self, mesh: &HullMesh) -> Vec<Vec3f> {
        mesh.vertices().iter().map(|&v| self.transform_point(v)).collect()
    }

    /// Rejects non-finite components and scales that would collapse or mirror
    /// the hull. A mirrored hull turns inside out and its buoyancy flips sign.
    pub fn validate(&self) -> Result<(), HydroError> {
        if !self.translation.is_finite() {
            return Err(HydroError::InvalidParameter {
                name: "translation",
                reason: "must be finite",
            });
        }
        if !self.rotation.is_finite() {
            return Err(HydroError::InvalidParameter {
                name: "rotation",
                reason: "must be finite",
            });
        }
        positive("scale.x", self.scale.x)?;
        positive("scale.y", self.scale.y)?;
        positive("scale.z", self.scale.z)?;
        Ok(())
    }
}

/// Axis-aligned bounds of a point set, `None` when empty.
pub fn bounds(points: &[Vec3f]) -> Option<(Vec3f, Vec3f)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
    )
}
