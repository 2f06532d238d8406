//! Procedural cube-sphere terrain mesh generator.
//!
//! A subdivided cube is projected onto the sphere and every vertex is pushed
//! in or out by fractal noise. The result is exposed as flat vertex, triangle
//! and per-triangle normal buffers ready for upload to a renderer.

pub mod export;
pub mod geometry;
pub mod logging;
pub mod mesh;
pub mod noise;

pub use geometry::{Axis, BoxDimensions, CubeFaceId, Projection, Segments};
pub use mesh::{CubeSphereMesh, FaceBuilder, MeshConfig, MeshError, MeshStats};
pub use noise::{ConstantField, FractalNoiseConfig, JitterField, NoiseConfig, NoiseField, SimplexField};
