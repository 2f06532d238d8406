//! Mesh generation configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{BoxDimensions, Projection, Segments};
use crate::noise::{FractalNoiseConfig, NoiseConfig};

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything needed to build a [`CubeSphereMesh`](super::CubeSphereMesh).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Extents of the box before projection.
    pub dimensions: BoxDimensions,
    /// Subdivisions along each box axis.
    pub segments: Segments,
    /// Fractal displacement settings.
    pub fractal: FractalNoiseConfig,
    /// Cube-to-sphere mapping.
    pub projection: Projection,
    /// Noise source used when the caller does not supply one.
    pub noise: NoiseConfig,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            dimensions: BoxDimensions::default(),
            segments: Segments::default(),
            fractal: FractalNoiseConfig::default(),
            projection: Projection::Normalize,
            noise: NoiseConfig::default(),
        }
    }
}

impl MeshConfig {
    /// Unit cube projected onto the sphere with the same grid on every face.
    pub fn sphere(segments: u32, octaves: u8) -> Self {
        Self {
            segments: Segments::uniform(segments),
            fractal: FractalNoiseConfig::with_octaves(octaves),
            ..Default::default()
        }
    }

    /// Unit cube left flat, with the same grid on every face.
    pub fn cube(segments: u32, octaves: u8) -> Self {
        Self {
            projection: Projection::Cube,
            ..Self::sphere(segments, octaves)
        }
    }

    /// Rough terrain with a fixed seed.
    pub fn rugged(segments: u32, seed: u64) -> Self {
        Self {
            segments: Segments::uniform(segments),
            fractal: FractalNoiseConfig::rugged(),
            noise: NoiseConfig::with_seed(seed),
            ..Default::default()
        }
    }

    /// Sets the projection from a sphere/cube switch.
    pub fn with_to_sphere(mut self, to_sphere: bool) -> Self {
        self.projection = Projection::from_to_sphere(to_sphere);
        self
    }

    /// Returns true if vertices are projected onto the sphere.
    pub fn to_sphere(&self) -> bool {
        self.projection.is_spherical()
    }

    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_presets() {
        let sphere = MeshConfig::sphere(16, 3);
        assert!(sphere.to_sphere());
        assert_eq!(sphere.segments, Segments::uniform(16));
        assert_eq!(sphere.fractal.octaves, 3);

        let cube = MeshConfig::cube(16, 3);
        assert!(!cube.to_sphere());

        let rugged = MeshConfig::rugged(32, 7);
        assert_eq!(rugged.noise.seed, Some(7));
        assert_eq!(rugged.fractal.octaves, 12);
    }

    #[test]
    fn test_with_to_sphere() {
        let config = MeshConfig::default().with_to_sphere(false);
        assert_eq!(config.projection, Projection::Cube);
        assert!(config.with_to_sphere(true).to_sphere());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "segments": {{ "width": 4, "height": 5, "depth": 6 }}, "projection": "cube" }}"#
        )
        .unwrap();

        let config = MeshConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.segments.height, 5);
        assert_eq!(config.projection, Projection::Cube);
        assert_eq!(config.fractal, FractalNoiseConfig::default());
        assert_eq!(config.dimensions, BoxDimensions::uniform(1.0));
    }

    #[test]
    fn test_negative_segments_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "segments": {{ "width": -1, "height": 1, "depth": 1 }} }}"#).unwrap();
        assert!(matches!(
            MeshConfig::from_json_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = MeshConfig::from_json_file(Path::new("/nonexistent/planetmesh.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
