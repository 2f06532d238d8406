//! Wavefront OBJ export for inspecting meshes in external viewers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::mesh::CubeSphereMesh;

/// Errors that can occur during OBJ export.
#[derive(Error, Debug)]
pub enum ObjExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the mesh as OBJ to any writer.
///
/// Vertices are emitted once (`v`), each triangle gets its own unit normal
/// (`vn`), and faces reference both (`f a//n b//n c//n`, 1-based).
pub fn write_obj<W: Write>(mesh: &CubeSphereMesh, writer: &mut W) -> Result<(), ObjExportError> {
    writeln!(writer, "# planetmesh")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for n in mesh.unit_normals() {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for (t, [a, b, c]) in mesh.indices().iter().enumerate() {
        let n = t + 1;
        writeln!(writer, "f {}//{} {}//{} {}//{}", a + 1, n, b + 1, n, c + 1, n)?;
    }
    Ok(())
}

/// Writes the mesh as an OBJ file at `path`.
pub fn export_mesh_obj(mesh: &CubeSphereMesh, path: &Path) -> Result<(), ObjExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshConfig;
    use crate::noise::ConstantField;
    use tempfile::tempdir;

    #[test]
    fn test_obj_line_counts() {
        let mesh = CubeSphereMesh::generate(&MeshConfig::sphere(1, 1), &ConstantField(1.0)).unwrap();
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 12);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
        assert!(text.lines().any(|l| l == "f 1//1 3//1 2//1"));
    }

    #[test]
    fn test_export_mesh_obj_creates_file() {
        let mesh = CubeSphereMesh::generate(&MeshConfig::cube(2, 1), &ConstantField(1.0)).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cube.obj");

        export_mesh_obj(&mesh, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
