//! RAW buffer export for renderer and engine imports.
//!
//! Each buffer is written as a headerless little-endian file next to a JSON
//! manifest describing the counts and file names.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mesh::{CubeSphereMesh, MeshConfig};

/// Errors that can occur during RAW export.
#[derive(Error, Debug)]
pub enum RawExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manifest error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for RAW export.
#[derive(Debug, Clone, Default)]
pub struct RawExportOptions {
    /// Also write per-corner normals (9 floats per triangle).
    pub corner_normals: bool,
    /// Also write the triangle index buffer (3 `u32` per triangle).
    pub indices: bool,
    /// Configuration to record in the manifest.
    pub config: Option<MeshConfig>,
}

/// File names written by an export, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestFiles {
    pub vertices: String,
    pub triangles: String,
    pub normals: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_normals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices: Option<String>,
}

/// JSON sidecar describing an exported mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshManifest {
    pub name: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub files: ManifestFiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<MeshConfig>,
}

/// Writes `values` as consecutive little-endian `f32`s.
pub fn write_f32_le(path: &Path, values: &[f32]) -> Result<(), RawExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for &value in values {
        writer.write_all(&value.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `values` as consecutive little-endian `u32`s.
pub fn write_u32_le(path: &Path, values: &[u32]) -> Result<(), RawExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for &value in values {
        writer.write_all(&value.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Exports a mesh's buffers plus a `{base_name}.json` manifest.
///
/// Files are named `{base_name}_vertices.f32`, `{base_name}_triangles.f32`,
/// `{base_name}_normals.f32`, and optionally `{base_name}_corner_normals.f32`
/// and `{base_name}_indices.u32`.
///
/// # Arguments
/// * `mesh` - The built mesh
/// * `output_dir` - Directory to write files to (created if missing)
/// * `base_name` - Prefix for every file name
/// * `options` - Which optional buffers to write, and the config to record
///
/// # Returns
/// The manifest that was written alongside the buffers
pub fn export_mesh_raw(
    mesh: &CubeSphereMesh,
    output_dir: &Path,
    base_name: &str,
    options: &RawExportOptions,
) -> Result<MeshManifest, RawExportError> {
    std::fs::create_dir_all(output_dir)?;

    let files = ManifestFiles {
        vertices: format!("{}_vertices.f32", base_name),
        triangles: format!("{}_triangles.f32", base_name),
        normals: format!("{}_normals.f32", base_name),
        corner_normals: options
            .corner_normals
            .then(|| format!("{}_corner_normals.f32", base_name)),
        indices: options.indices.then(|| format!("{}_indices.u32", base_name)),
    };

    write_f32_le(&output_dir.join(&files.vertices), mesh.vertex_buffer())?;
    write_f32_le(&output_dir.join(&files.triangles), mesh.triangle_buffer())?;
    write_f32_le(&output_dir.join(&files.normals), mesh.normal_buffer())?;
    if let Some(name) = &files.corner_normals {
        write_f32_le(&output_dir.join(name), &mesh.corner_normals())?;
    }
    if let Some(name) = &files.indices {
        write_u32_le(&output_dir.join(name), mesh.index_buffer())?;
    }

    let stats = mesh.stats();
    let manifest = MeshManifest {
        name: base_name.to_string(),
        vertex_count: stats.vertex_count,
        triangle_count: stats.triangle_count,
        min_radius: stats.min_radius,
        max_radius: stats.max_radius,
        files,
        config: options.config,
    };

    let manifest_file = File::create(output_dir.join(format!("{}.json", base_name)))?;
    serde_json::to_writer_pretty(BufWriter::new(manifest_file), &manifest)?;

    Ok(manifest)
}

/// Returns the expected byte size of a RAW file holding `count` 4-byte values.
pub fn expected_file_size(count: usize) -> u64 {
    count as u64 * 4
}
