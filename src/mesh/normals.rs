//! Flat per-triangle normals.

use glam::Vec3;

/// Unnormalized normal of the triangle `(p1, p2, p3)`: `(p2 - p1) × (p3 - p1)`.
///
/// Its length is twice the triangle's area; degenerate triangles give zero.
pub fn triangle_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p2 - p1).cross(p3 - p1)
}

/// Repeats each triangle normal once per corner, flattened.
pub fn expand_to_corners(normals: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(normals.len() * 9);
    for n in normals {
        for _ in 0..3 {
            out.extend_from_slice(&n.to_array());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_clockwise_points_up() {
        let n = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(n, Vec3::Z);
    }

    #[test]
    fn test_length_is_twice_area() {
        let n = triangle_normal(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(n.length(), 6.0);
    }

    #[test]
    fn test_degenerate_is_zero() {
        let n = triangle_normal(Vec3::ONE, Vec3::ONE * 2.0, Vec3::ONE * 3.0);
        assert_eq!(n, Vec3::ZERO);
    }

    #[test]
    fn test_expand_to_corners() {
        let out = expand_to_corners(&[Vec3::X, Vec3::new(0.0, 2.0, 0.0)]);
        assert_eq!(out.len(), 18);
        assert_eq!(&out[0..9], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(&out[9..12], &[0.0, 2.0, 0.0]);
    }
}
