use thiserror::Error;

/// Construction-time failures. Per-step computation never fails; these are
/// raised when hull meshes, grids or parameters are built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydroError {
    #[error("hull mesh has no triangles")]
    EmptyMesh,
    #[error("index count {0} is not a multiple of 3")]
    RaggedIndices(usize),
    #[error("triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error("hull vertex {0} is not finite")]
    NonFiniteVertex(usize),
    #[error("heightfield of {width}x{length} cells needs {expected} samples, got {actual}")]
    HeightSampleCount {
        width: usize,
        length: usize,
        expected: usize,
        actual: usize,
    },
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}
