//! Cube face identification and the per-face orientation table.

use serde::{Deserialize, Serialize};

use super::axis::Axis;

/// Identifies which face of the cube a vertex block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFaceId {
    /// +X face (right)
    PosX = 0,
    /// -X face (left)
    NegX = 1,
    /// +Y face (top)
    PosY = 2,
    /// -Y face (bottom)
    NegY = 3,
    /// +Z face (front)
    PosZ = 4,
    /// -Z face (back)
    NegZ = 5,
}

/// Extents of the box that gets deformed into the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl BoxDimensions {
    /// A cube with the given edge length.
    pub const fn uniform(size: f32) -> Self {
        Self {
            width: size,
            height: size,
            depth: size,
        }
    }
}

/// Subdivision counts along the box's X (width), Y (height) and Z (depth) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segments {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Default for Segments {
    fn default() -> Self {
        Self::uniform(128)
    }
}

impl Segments {
    /// The same segment count on every axis.
    pub const fn uniform(segments: u32) -> Self {
        Self {
            width: segments,
            height: segments,
            depth: segments,
        }
    }
}

/// How a face's local `(u, v, w)` frame maps onto world axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceOrientation {
    /// World axis the grid columns run along.
    pub u: Axis,
    /// World axis the grid rows run along.
    pub v: Axis,
    /// World axis the face is offset along.
    pub w: Axis,
    /// Sign applied to the column coordinate.
    pub udir: f32,
    /// Sign applied to the row coordinate.
    pub vdir: f32,
    /// Side of the box the face sits on along `w`.
    pub wdir: f32,
}

/// A fully resolved face: orientation, planar extents and grid resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlane {
    pub face: CubeFaceId,
    pub orientation: FaceOrientation,
    /// Extent along `u`.
    pub width: f32,
    /// Extent along `v`.
    pub height: f32,
    /// Extent along `w`; the face sits at `wdir * depth / 2`.
    pub depth: f32,
    /// Columns of grid cells.
    pub grid_x: u32,
    /// Rows of grid cells.
    pub grid_y: u32,
}

impl FacePlane {
    /// Number of vertices this face contributes.
    pub fn vertex_count(&self) -> usize {
        (self.grid_x as usize + 1) * (self.grid_y as usize + 1)
    }

    /// Number of triangles this face contributes.
    pub fn triangle_count(&self) -> usize {
        self.grid_x as usize * self.grid_y as usize * 2
    }
}

impl CubeFaceId {
    /// Returns all six cube faces in build order.
    pub const fn all() -> [CubeFaceId; 6] {
        [
            CubeFaceId::PosX,
            CubeFaceId::NegX,
            CubeFaceId::PosY,
            CubeFaceId::NegY,
            CubeFaceId::PosZ,
            CubeFaceId::NegZ,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns a short name for the face (e.g., "posx", "negy").
    pub const fn short_name(self) -> &'static str {
        match self {
            CubeFaceId::PosX => "posx",
            CubeFaceId::NegX => "negx",
            CubeFaceId::PosY => "posy",
            CubeFaceId::NegY => "negy",
            CubeFaceId::PosZ => "posz",
            CubeFaceId::NegZ => "negz",
        }
    }

    /// Axis mapping and signs for this face.
    ///
    /// The signs are chosen so that the `(a, b, d)` / `(b, c, d)` cell split
    /// winds counter-clockwise when seen from outside the box.
    pub const fn orientation(self) -> FaceOrientation {
        let (u, v, w, udir, vdir, wdir) = match self {
            CubeFaceId::PosX => (Axis::Z, Axis::Y, Axis::X, -1.0, -1.0, 1.0),
            CubeFaceId::NegX => (Axis::Z, Axis::Y, Axis::X, 1.0, -1.0, -1.0),
            CubeFaceId::PosY => (Axis::X, Axis::Z, Axis::Y, 1.0, 1.0, 1.0),
            CubeFaceId::NegY => (Axis::X, Axis::Z, Axis::Y, 1.0, -1.0, -1.0),
            CubeFaceId::PosZ => (Axis::X, Axis::Y, Axis::Z, 1.0, -1.0, 1.0),
            CubeFaceId::NegZ => (Axis::X, Axis::Y, Axis::Z, -1.0, -1.0, -1.0),
        };
        FaceOrientation {
            u,
            v,
            w,
            udir,
            vdir,
            wdir,
        }
    }

    /// Resolves this face against the box extents and subdivision counts.
    pub fn plane(self, dimensions: BoxDimensions, segments: Segments) -> FacePlane {
        let orientation = self.orientation();
        let extent = |axis: Axis| match axis {
            Axis::X => dimensions.width,
            Axis::Y => dimensions.height,
            Axis::Z => dimensions.depth,
        };
        let segs = |axis: Axis| match axis {
            Axis::X => segments.width,
            Axis::Y => segments.height,
            Axis::Z => segments.depth,
        };

        FacePlane {
            face: self,
            orientation,
            width: extent(orientation.u),
            height: extent(orientation.v),
            depth: extent(orientation.w),
            grid_x: segs(orientation.u),
            grid_y: segs(orientation.v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_faces() {
        let faces = CubeFaceId::all();
        assert_eq!(faces.len(), 6);
        for (i, face) in faces.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_orientation_axes_are_distinct() {
        for face in CubeFaceId::all() {
            let o = face.orientation();
            assert_ne!(o.u, o.v, "{:?}", face);
            assert_ne!(o.u, o.w, "{:?}", face);
            assert_ne!(o.v, o.w, "{:?}", face);
        }
    }

    #[test]
    fn test_opposite_faces_share_axes() {
        let pairs = [
            (CubeFaceId::PosX, CubeFaceId::NegX),
            (CubeFaceId::PosY, CubeFaceId::NegY),
            (CubeFaceId::PosZ, CubeFaceId::NegZ),
        ];
        for (pos, neg) in pairs {
            let (a, b) = (pos.orientation(), neg.orientation());
            assert_eq!((a.u, a.v, a.w), (b.u, b.v, b.w));
            assert_eq!(a.wdir, 1.0);
            assert_eq!(b.wdir, -1.0);
        }
    }

    #[test]
    fn test_plane_picks_extents_and_grid_by_axis() {
        let dims = BoxDimensions {
            width: 2.0,
            height: 3.0,
            depth: 4.0,
        };
        let segs = Segments {
            width: 5,
            height: 6,
            depth: 7,
        };

        let px = CubeFaceId::PosX.plane(dims, segs);
        assert_eq!((px.width, px.height, px.depth), (4.0, 3.0, 2.0));
        assert_eq!((px.grid_x, px.grid_y), (7, 6));

        let py = CubeFaceId::NegY.plane(dims, segs);
        assert_eq!((py.width, py.height, py.depth), (2.0, 4.0, 3.0));
        assert_eq!((py.grid_x, py.grid_y), (5, 7));

        let pz = CubeFaceId::PosZ.plane(dims, segs);
        assert_eq!((pz.width, pz.height, pz.depth), (2.0, 3.0, 4.0));
        assert_eq!((pz.grid_x, pz.grid_y), (5, 6));
        assert_eq!(pz.vertex_count(), 6 * 7);
        assert_eq!(pz.triangle_count(), 5 * 6 * 2);
    }
}
