//! Coherent 3D noise sources.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use simdnoise::NoiseBuilder;

/// A scalar field queried at arbitrary continuous coordinates.
///
/// Implementations must be deterministic for a given coordinate over the
/// lifetime of one instance and return finite values for finite input.
pub trait NoiseField {
    /// Samples the field at `(x, y, z)`.
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

impl<F: NoiseField + ?Sized> NoiseField for &F {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).sample(x, y, z)
    }
}

impl<F: NoiseField + ?Sized> NoiseField for Box<F> {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).sample(x, y, z)
    }
}

/// simdnoise's single-octave 4D simplex peaks near ±0.03; this brings it to
/// roughly `[-1, 1]` before the result is clamped there.
const SIMPLEX_RAW_SCALE: f32 = 32.0;

/// Simplex noise backed by simdnoise.
///
/// Returns `bias + amplitude * simplex(p * frequency)`, where the simplex
/// term spans `[-1, 1]`. The defaults put samples in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexField {
    pub seed: i32,
    pub frequency: f32,
    pub amplitude: f32,
    pub bias: f32,
}

impl SimplexField {
    /// Creates a field with the given seed and default shaping.
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            frequency: 1.0,
            amplitude: 0.5,
            bias: 0.5,
        }
    }

    /// Creates a field from a 64-bit seed, folding the high half into the
    /// 32-bit seed simdnoise takes.
    pub fn from_seed(seed: u64) -> Self {
        Self::new((seed ^ (seed >> 32)) as i32)
    }

    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }
}

impl NoiseField for SimplexField {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let f = self.frequency;
        // Single-octave 4D simplex with w pinned to 0; fractal layering
        // happens in `sample_fractal_noise`.
        let value = NoiseBuilder::fbm_4d_offset(x * f, 1, y * f, 1, z * f, 1, 0.0, 1)
            .with_seed(self.seed)
            .with_freq(1.0)
            .with_octaves(1)
            .generate()
            .0[0];

        let value = (value * SIMPLEX_RAW_SCALE).clamp(-1.0, 1.0);
        self.bias + self.amplitude * value
    }
}

/// Uncorrelated per-coordinate noise.
///
/// Each distinct coordinate gets its own value in `[-amplitude, amplitude)`
/// drawn from a ChaCha8 stream keyed by the coordinate bits and the seed, so
/// repeated queries agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterField {
    pub seed: u64,
    pub amplitude: f32,
}

impl JitterField {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            amplitude: 1.0,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    fn key(&self, x: f32, y: f32, z: f32) -> u64 {
        // `+ 0.0` folds -0.0 onto 0.0 so both hash identically.
        let mut h = self.seed ^ 0x9E37_79B9_7F4A_7C15;
        for bits in [(x + 0.0).to_bits(), (y + 0.0).to_bits(), (z + 0.0).to_bits()] {
            h ^= u64::from(bits);
            h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
            h ^= h >> 31;
        }
        h
    }
}

impl NoiseField for JitterField {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut rng = ChaCha8Rng::seed_from_u64(self.key(x, y, z));
        (rng.random::<f32>() * 2.0 - 1.0) * self.amplitude
    }
}

/// A field that returns the same value everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantField(pub f32);

impl NoiseField for ConstantField {
    fn sample(&self, _x: f32, _y: f32, _z: f32) -> f32 {
        self.0
    }
}

/// Which noise source a [`NoiseConfig`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    #[default]
    Simplex,
    Jitter,
    /// Returns `bias` everywhere.
    Constant,
}

/// Serializable description of a noise source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub kind: NoiseKind,
    /// Seed for the field; `None` draws one from entropy at build time.
    pub seed: Option<u64>,
    pub frequency: f32,
    pub amplitude: f32,
    pub bias: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Simplex,
            seed: None,
            frequency: 1.0,
            amplitude: 0.5,
            bias: 0.5,
        }
    }
}

impl NoiseConfig {
    /// Creates a simplex configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Creates a constant field configuration.
    pub fn constant(value: f32) -> Self {
        Self {
            kind: NoiseKind::Constant,
            bias: value,
            ..Default::default()
        }
    }

    /// Returns the configured seed, or a fresh one from entropy.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random::<u64>)
    }

    /// Builds the field, drawing a seed from entropy if none is configured.
    pub fn build(&self) -> Box<dyn NoiseField> {
        self.build_with_seed(self.resolve_seed())
    }

    /// Builds the field with an explicit seed, ignoring `self.seed`.
    pub fn build_with_seed(&self, seed: u64) -> Box<dyn NoiseField> {
        match self.kind {
            NoiseKind::Simplex => Box::new(
                SimplexField::from_seed(seed)
                    .with_frequency(self.frequency)
                    .with_amplitude(self.amplitude)
                    .with_bias(self.bias),
            ),
            NoiseKind::Jitter => Box::new(JitterField {
                seed,
                amplitude: self.amplitude,
            }),
            NoiseKind::Constant => Box::new(ConstantField(self.bias)),
        }
    }
}
