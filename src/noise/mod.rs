//! Noise generation for terrain displacement.
//!
//! `field` holds the base noise sources (simdnoise simplex, seeded jitter,
//! constant); `fractal` layers octaves of any of them.

mod field;
mod fractal;

pub use field::{ConstantField, JitterField, NoiseConfig, NoiseField, NoiseKind, SimplexField};
pub use fractal::{sample_fractal_noise, FractalNoiseConfig};
