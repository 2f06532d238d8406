use thiserror::Error;

use crate::geometry::{Axis, CubeFaceId};

/// Errors that can occur while building or validating a mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("Invalid grid: face {} has zero segments along {}", .face.short_name(), .axis.name())]
    InvalidGrid { face: CubeFaceId, axis: Axis },
    #[error("Noise field returned non-finite value {value} at vertex {vertex}")]
    NoiseFieldFault { vertex: usize, value: f32 },
    #[error("Mesh needs {count} vertices, more than 32-bit indices can address")]
    TooManyVertices { count: usize },
}
