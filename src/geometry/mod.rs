//! Cube geometry: world axes, the six face orientations and the
//! cube-to-sphere projections.

mod axis;
mod face;
mod projection;

pub use axis::{set_component, Axis};
pub use face::{BoxDimensions, CubeFaceId, FaceOrientation, FacePlane, Segments};
pub use projection::{spherify_point, Projection};
