//! Cube-to-sphere projections.
//!
//! `Normalize` is the classic spherified cube: every cube-surface point is
//! pushed out to unit length along its own direction. `Spherify` uses the
//! analytical mapping, which spreads vertices more evenly near cube corners.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How flat cube-face points are mapped before noise displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Keep points on the planar box faces.
    Cube,
    /// Normalize each point to unit length.
    #[default]
    Normalize,
    /// Analytical spherification of the point scaled onto the `[-1, 1]` cube.
    Spherify,
}

impl Projection {
    /// Maps the `to_sphere` switch onto a projection.
    pub fn from_to_sphere(to_sphere: bool) -> Self {
        if to_sphere {
            Projection::Normalize
        } else {
            Projection::Cube
        }
    }

    /// Returns true if this projection lands points on the unit sphere.
    pub fn is_spherical(self) -> bool {
        !matches!(self, Projection::Cube)
    }

    /// Applies the projection to a flat box-surface point.
    pub fn apply(self, point: Vec3) -> Vec3 {
        match self {
            Projection::Cube => point,
            Projection::Normalize => point.normalize_or_zero(),
            Projection::Spherify => {
                let extent = point.abs().max_element();
                if extent == 0.0 {
                    point
                } else {
                    spherify_point(point / extent)
                }
            }
        }
    }
}

/// Transforms a point on the unit cube surface to the unit sphere.
///
/// `cube_pos` must have one coordinate equal to ±1 and the others in
/// `[-1, 1]`.
pub fn spherify_point(cube_pos: Vec3) -> Vec3 {
    let x2 = cube_pos.x * cube_pos.x;
    let y2 = cube_pos.y * cube_pos.y;
    let z2 = cube_pos.z * cube_pos.z;

    Vec3::new(
        cube_pos.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).max(0.0).sqrt(),
        cube_pos.y * (1.0 - x2 / 2.0 - z2 / 2.0 + x2 * z2 / 3.0).max(0.0).sqrt(),
        cube_pos.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).max(0.0).sqrt(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lands_on_unit_sphere() {
        let points = [
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.5, -0.1, 0.3),
            Vec3::new(-0.2, 0.5, 0.0),
            Vec3::new(3.0, 1.0, -3.0),
        ];
        for p in points {
            let len = Projection::Normalize.apply(p).length();
            assert!((len - 1.0).abs() < 1e-6, "{:?} -> length {}", p, len);
        }
    }

    #[test]
    fn test_cube_projection_is_identity() {
        let p = Vec3::new(0.5, -0.25, 0.1);
        assert_eq!(Projection::Cube.apply(p), p);
    }

    #[test]
    fn test_spherify_any_box_size() {
        // Half-extent 0.5 and 2.0 boxes both land on the unit sphere.
        let points = [
            Vec3::new(0.5, 0.2, -0.4),
            Vec3::new(-2.0, 1.5, 2.0),
            Vec3::new(0.1, 0.5, 0.5),
        ];
        for p in points {
            let len = Projection::Spherify.apply(p).length();
            assert!((len - 1.0).abs() < 1e-5, "{:?} -> length {}", p, len);
        }
    }

    #[test]
    fn test_spherify_face_centers_unchanged() {
        let face_centers = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ];

        for center in face_centers {
            let sphere_p = spherify_point(center);
            assert!(
                (sphere_p - center).length() < 1e-6,
                "Face center {:?} changed to {:?}",
                center,
                sphere_p
            );
        }
    }

    #[test]
    fn test_from_to_sphere() {
        assert_eq!(Projection::from_to_sphere(true), Projection::Normalize);
        assert_eq!(Projection::from_to_sphere(false), Projection::Cube);
        assert!(!Projection::Cube.is_spherical());
        assert!(Projection::Spherify.is_spherical());
    }
}
