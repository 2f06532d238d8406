//! The finished cube-sphere terrain mesh.

use glam::Vec3;
use serde::Serialize;
use tracing::{debug, debug_span};

use super::config::MeshConfig;
use super::error::MeshError;
use super::face_builder::{check_grid, FaceBuilder};
use super::normals::{expand_to_corners, triangle_normal};
use super::triangulate::triangulate_grid;
use crate::geometry::{CubeFaceId, FacePlane};
use crate::noise::NoiseField;

/// Where one face's data lives inside the shared buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceRange {
    pub face: CubeFaceId,
    pub first_vertex: usize,
    pub vertex_count: usize,
    pub first_triangle: usize,
    pub triangle_count: usize,
}

/// Summary numbers for a built mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Smallest distance of any vertex from the origin.
    pub min_radius: f32,
    /// Largest distance of any vertex from the origin.
    pub max_radius: f32,
}

/// A triangulated, noise-displaced cube or cube-sphere.
///
/// Built in one pass by [`CubeSphereMesh::generate`]; all buffers are
/// immutable afterwards. Vertices are ordered face-major (+X, −X, +Y, −Y, +Z,
/// −Z), then row-major within a face. Triangles own copies of their corner
/// positions, and each carries one flat, unnormalized normal.
#[derive(Debug, Clone)]
pub struct CubeSphereMesh {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    triangles: Vec<[Vec3; 3]>,
    normals: Vec<Vec3>,
    faces: Vec<FaceRange>,
}

/// Running state threaded through the six face builds.
struct Accumulator {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    triangles: Vec<[Vec3; 3]>,
    normals: Vec<Vec3>,
    faces: Vec<FaceRange>,
}

impl Accumulator {
    fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles),
            triangles: Vec::with_capacity(triangles),
            normals: Vec::with_capacity(triangles),
            faces: Vec::with_capacity(6),
        }
    }

    fn add_face<F: NoiseField + ?Sized>(
        mut self,
        builder: &FaceBuilder<'_, F>,
        plane: &FacePlane,
    ) -> Result<Self, MeshError> {
        let first_vertex = self.vertices.len();
        let first_triangle = self.triangles.len();

        let offset = u32::try_from(first_vertex).map_err(|_| MeshError::TooManyVertices {
            count: first_vertex + plane.vertex_count(),
        })?;
        let vertex_count = builder.build(plane, &mut self.vertices)?;

        for tri in triangulate_grid(plane.grid_x, plane.grid_y, offset) {
            let corners = tri.map(|i| self.vertices[i as usize]);
            self.normals.push(triangle_normal(corners[0], corners[1], corners[2]));
            self.triangles.push(corners);
            self.indices.push(tri);
        }

        let range = FaceRange {
            face: plane.face,
            first_vertex,
            vertex_count,
            first_triangle,
            triangle_count: self.triangles.len() - first_triangle,
        };
        debug!(
            face = plane.face.short_name(),
            grid_x = plane.grid_x,
            grid_y = plane.grid_y,
            vertices = range.vertex_count,
            triangles = range.triangle_count,
            "built face"
        );
        self.faces.push(range);

        Ok(self)
    }

    fn finish(self) -> CubeSphereMesh {
        CubeSphereMesh {
            vertices: self.vertices,
            indices: self.indices,
            triangles: self.triangles,
            normals: self.normals,
            faces: self.faces,
        }
    }
}

impl CubeSphereMesh {
    /// Builds a mesh using the noise source described by `config.noise`.
    pub fn from_config(config: &MeshConfig) -> Result<Self, MeshError> {
        let field = config.noise.build();
        Self::generate(config, &field)
    }

    /// Builds a mesh displaced by `field`.
    ///
    /// Every face's grid and the total vertex count are validated before any
    /// vertex is produced, so an `InvalidGrid` or `TooManyVertices` error never
    /// leaves a partial mesh behind. Non-finite
    /// noise values are not filtered; see [`check_finite`](Self::check_finite).
    pub fn generate<F: NoiseField + ?Sized>(config: &MeshConfig, field: &F) -> Result<Self, MeshError> {
        let planes = CubeFaceId::all().map(|face| face.plane(config.dimensions, config.segments));
        for plane in &planes {
            check_grid(plane)?;
        }

        let _span = debug_span!(
            "cube_sphere",
            projection = ?config.projection,
            octaves = config.fractal.octaves
        )
        .entered();

        let vertex_total: usize = planes.iter().map(FacePlane::vertex_count).sum();
        if u32::try_from(vertex_total).is_err() {
            return Err(MeshError::TooManyVertices { count: vertex_total });
        }
        let triangle_total: usize = planes.iter().map(FacePlane::triangle_count).sum();
        let builder = FaceBuilder::new(field, &config.fractal, config.projection);

        let mesh = planes
            .iter()
            .try_fold(
                Accumulator::with_capacity(vertex_total, triangle_total),
                |acc, plane| acc.add_face(&builder, plane),
            )?
            .finish();

        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "mesh complete"
        );
        Ok(mesh)
    }

    /// Vertex positions in build order.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Vertex positions flattened to 3 floats per vertex.
    pub fn vertex_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Corner positions of each triangle.
    pub fn triangles(&self) -> &[[Vec3; 3]] {
        &self.triangles
    }

    /// Triangle corner positions flattened to 9 floats per triangle.
    pub fn triangle_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Vertex indices each triangle was built from.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Triangle indices flattened to 3 per triangle.
    pub fn index_buffer(&self) -> &[u32] {
        bytemuck::cast_slice(&self.indices)
    }

    /// One unnormalized normal per triangle.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle normals flattened to 3 floats per triangle.
    pub fn normal_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Triangle normals repeated for each corner (9 floats per triangle),
    /// parallel to [`triangle_buffer`](Self::triangle_buffer).
    pub fn corner_normals(&self) -> Vec<f32> {
        expand_to_corners(&self.normals)
    }

    /// Unit-length triangle normals; degenerate triangles get zero.
    pub fn unit_normals(&self) -> Vec<Vec3> {
        self.normals.iter().map(|n| n.normalize_or_zero()).collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Buffer ranges of each face, in build order.
    pub fn face_ranges(&self) -> &[FaceRange] {
        &self.faces
    }

    /// Buffer range of a single face.
    pub fn face_range(&self, face: CubeFaceId) -> FaceRange {
        self.faces[face.index()]
    }

    /// Computes vertex/triangle counts and the radius range.
    pub fn stats(&self) -> MeshStats {
        let (min_radius, max_radius) = self
            .vertices
            .iter()
            .map(|v| v.length())
            .fold((f32::MAX, f32::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)));

        MeshStats {
            vertex_count: self.vertex_count(),
            triangle_count: self.triangle_count(),
            min_radius,
            max_radius,
        }
    }

    /// Reports the first vertex carrying a non-finite coordinate.
    ///
    /// Such values can only come from the noise field, so they are reported
    /// as a noise field fault.
    pub fn check_finite(&self) -> Result<(), MeshError> {
        for (vertex, v) in self.vertices.iter().enumerate() {
            if let Some(&value) = v.to_array().iter().find(|c| !c.is_finite()) {
                return Err(MeshError::NoiseFieldFault { vertex, value });
            }
        }
        Ok(())
    }
}
