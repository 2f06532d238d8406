//! Export module for saving generated meshes.
//!
//! RAW little-endian buffers with a JSON manifest for renderer uploads, and
//! Wavefront OBJ for external viewers.

mod obj;
mod raw;

pub use obj::{export_mesh_obj, write_obj, ObjExportError};
pub use raw::{
    expected_file_size, export_mesh_raw, write_f32_le, write_u32_le, ManifestFiles, MeshManifest,
    RawExportError, RawExportOptions,
};
