//! Vertex generation for a single cube face.

use glam::Vec3;

use super::error::MeshError;
use crate::geometry::{set_component, FacePlane, Projection};
use crate::noise::{sample_fractal_noise, FractalNoiseConfig, NoiseField};

/// Builds the projected, noise-displaced vertex grid of one face.
pub struct FaceBuilder<'a, F: NoiseField + ?Sized> {
    field: &'a F,
    fractal: &'a FractalNoiseConfig,
    projection: Projection,
}

impl<'a, F: NoiseField + ?Sized> FaceBuilder<'a, F> {
    pub fn new(field: &'a F, fractal: &'a FractalNoiseConfig, projection: Projection) -> Self {
        Self {
            field,
            fractal,
            projection,
        }
    }

    /// Computes the final position of a single vertex.
    pub fn vertex(&self, plane: &FacePlane, ix: u32, iy: u32) -> Vec3 {
        let point = self.projection.apply(plane_point(plane, ix, iy));
        let n = sample_fractal_noise(self.field, point, self.fractal);
        point * n
    }

    /// Appends the face's `(grid_x + 1) * (grid_y + 1)` vertices in row-major
    /// order (`iy` outer, `ix` inner).
    ///
    /// # Arguments
    /// * `plane` - The face, its extents and its segment counts
    /// * `vertices` - Shared buffer to append to; existing entries are untouched
    ///
    /// # Returns
    /// The number of vertices appended, or `InvalidGrid` for a zero segment count
    pub fn build(&self, plane: &FacePlane, vertices: &mut Vec<Vec3>) -> Result<usize, MeshError> {
        check_grid(plane)?;

        let before = vertices.len();
        vertices.reserve(plane.vertex_count());
        for iy in 0..=plane.grid_y {
            for ix in 0..=plane.grid_x {
                vertices.push(self.vertex(plane, ix, iy));
            }
        }

        Ok(vertices.len() - before)
    }
}

/// Returns the flat (unprojected) box-surface point for grid vertex `(ix, iy)`.
pub fn plane_point(plane: &FacePlane, ix: u32, iy: u32) -> Vec3 {
    let o = &plane.orientation;
    let segment_width = plane.width / plane.grid_x as f32;
    let segment_height = plane.height / plane.grid_y as f32;

    let x = ix as f32 * segment_width - plane.width / 2.0;
    let y = iy as f32 * segment_height - plane.height / 2.0;

    let mut point = Vec3::ZERO;
    set_component(&mut point, o.u, x * o.udir);
    set_component(&mut point, o.v, y * o.vdir);
    set_component(&mut point, o.w, o.wdir * plane.depth / 2.0);
    point
}

/// Rejects planes with a zero segment count on either grid axis.
pub(crate) fn check_grid(plane: &FacePlane) -> Result<(), MeshError> {
    if plane.grid_x == 0 {
        return Err(MeshError::InvalidGrid {
            face: plane.face,
            axis: plane.orientation.u,
        });
    }
    if plane.grid_y == 0 {
        return Err(MeshError::InvalidGrid {
            face: plane.face,
            axis: plane.orientation.v,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Axis, BoxDimensions, CubeFaceId, Segments};
    use crate::noise::ConstantField;

    fn unit_plane(face: CubeFaceId, segments: u32) -> FacePlane {
        face.plane(BoxDimensions::uniform(1.0), Segments::uniform(segments))
    }

    #[test]
    fn test_build_appends_grid_vertices() {
        let field = ConstantField(1.0);
        let fractal = FractalNoiseConfig::with_octaves(1);
        let builder = FaceBuilder::new(&field, &fractal, Projection::Cube);

        let mut vertices = vec![Vec3::splat(9.0)];
        let plane = CubeFaceId::PosZ.plane(
            BoxDimensions::uniform(1.0),
            Segments {
                width: 3,
                height: 2,
                depth: 1,
            },
        );
        let added = builder.build(&plane, &mut vertices).unwrap();

        assert_eq!(added, 4 * 3);
        assert_eq!(vertices.len(), 1 + 12);
        assert_eq!(vertices[0], Vec3::splat(9.0), "existing vertices untouched");
    }

    #[test]
    fn test_row_major_order() {
        // +Z: u = x (udir +1), v = y (vdir -1), face at z = +0.5.
        let plane = unit_plane(CubeFaceId::PosZ, 2);
        assert_eq!(plane_point(&plane, 0, 0), Vec3::new(-0.5, 0.5, 0.5));
        assert_eq!(plane_point(&plane, 1, 0), Vec3::new(0.0, 0.5, 0.5));
        assert_eq!(plane_point(&plane, 0, 1), Vec3::new(-0.5, 0.0, 0.5));
        assert_eq!(plane_point(&plane, 2, 2), Vec3::new(0.5, -0.5, 0.5));

        let field = ConstantField(1.0);
        let fractal = FractalNoiseConfig::with_octaves(1);
        let builder = FaceBuilder::new(&field, &fractal, Projection::Cube);
        let mut vertices = Vec::new();
        builder.build(&plane, &mut vertices).unwrap();
        assert_eq!(vertices[1], Vec3::new(0.0, 0.5, 0.5));
        assert_eq!(vertices[3], Vec3::new(-0.5, 0.0, 0.5));
    }

    #[test]
    fn test_negative_faces_sit_on_far_side() {
        let plane = unit_plane(CubeFaceId::NegX, 1);
        let p = plane_point(&plane, 0, 0);
        assert_eq!(p.x, -0.5);
        let plane = unit_plane(CubeFaceId::PosY, 1);
        let p = plane_point(&plane, 1, 1);
        assert_eq!(p.y, 0.5);
    }

    #[test]
    fn test_zero_noise_halves_projected_point() {
        let field = ConstantField(0.0);
        let fractal = FractalNoiseConfig::with_octaves(1);
        let builder = FaceBuilder::new(&field, &fractal, Projection::Normalize);
        let plane = unit_plane(CubeFaceId::PosX, 4);

        let mut vertices = Vec::new();
        builder.build(&plane, &mut vertices).unwrap();
        for v in vertices {
            assert!((v.length() - 0.5).abs() < 1e-6, "{:?}", v);
        }
    }

    #[test]
    fn test_zero_grid_rejected() {
        let field = ConstantField(1.0);
        let fractal = FractalNoiseConfig::default();
        let builder = FaceBuilder::new(&field, &fractal, Projection::Normalize);
        let plane = CubeFaceId::PosY.plane(
            BoxDimensions::uniform(1.0),
            Segments {
                width: 4,
                height: 4,
                depth: 0,
            },
        );

        let mut vertices = Vec::new();
        let err = builder.build(&plane, &mut vertices).unwrap_err();
        assert_eq!(
            err,
            MeshError::InvalidGrid {
                face: CubeFaceId::PosY,
                axis: Axis::Z
            }
        );
        assert!(vertices.is_empty());
    }
}
