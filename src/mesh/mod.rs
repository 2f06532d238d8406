//! Procedural cube-sphere mesh generation.
//!
//! Six [`FaceBuilder`] passes fill one shared vertex buffer; each face is
//! triangulated right after its vertices land, and every triangle gets a flat
//! normal. [`CubeSphereMesh`] holds the finished buffers.

mod config;
mod cube_sphere;
mod error;
mod face_builder;
mod normals;
mod triangulate;

pub use config::{ConfigError, MeshConfig};
pub use cube_sphere::{CubeSphereMesh, FaceRange, MeshStats};
pub use error::MeshError;
pub use face_builder::{plane_point, FaceBuilder};
pub use normals::{expand_to_corners, triangle_normal};
pub use triangulate::triangulate_grid;
