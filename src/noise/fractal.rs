//! Multi-octave fractal Brownian motion (fBm) accumulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::field::NoiseField;

/// Configuration for multi-octave fractal noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalNoiseConfig {
    /// Number of noise octaves.
    pub octaves: u8,
    /// Frequency multiplier per octave (typically 2.0).
    pub lacunarity: f32,
    /// Amplitude decay per octave (typically 0.5).
    pub persistence: f32,
    /// Added to every coordinate before sampling, keeping queries away from
    /// the noise origin at the cube center.
    pub domain_offset: f32,
}

impl Default for FractalNoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 10,
            lacunarity: 2.0,
            persistence: 0.5,
            domain_offset: 1.0,
        }
    }
}

impl FractalNoiseConfig {
    /// Default shaping with the given octave count.
    pub fn with_octaves(octaves: u8) -> Self {
        Self {
            octaves,
            ..Default::default()
        }
    }

    /// Many octaves for fine, rough relief.
    pub fn rugged() -> Self {
        Self::with_octaves(12)
    }
}

/// Samples the fractal sum of `field` at `pos`.
///
/// The raw octave sum is not normalized by the amplitude total; it is
/// remapped with `n * 0.5 + 0.5`, so zero octaves yield `0.5`.
///
/// # Arguments
/// * `field` - Base noise sampled once per octave
/// * `pos` - A 3D position (typically a projected cube-sphere point)
/// * `config` - Octave count, lacunarity, persistence and domain offset
///
/// # Returns
/// The remapped noise value, used directly as a radial scale factor
pub fn sample_fractal_noise<F: NoiseField + ?Sized>(
    field: &F,
    pos: Vec3,
    config: &FractalNoiseConfig,
) -> f32 {
    let p = pos + Vec3::splat(config.domain_offset);

    let mut total = 0.0f32;
    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;

    for _ in 0..config.octaves {
        total += amplitude * field.sample(p.x * frequency, p.y * frequency, p.z * frequency);
        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }

    total * 0.5 + 0.5
}
