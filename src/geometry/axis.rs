//! World axes and per-component vector assignment.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// Component index (0 for X, 1 for Y, 2 for Z).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Reads this axis' component from `point`.
    pub fn component(self, point: Vec3) -> f32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }
}

/// Writes `value` into the component of `point` selected by `axis`.
pub fn set_component(point: &mut Vec3, axis: Axis, value: f32) {
    match axis {
        Axis::X => point.x = value,
        Axis::Y => point.y = value,
        Axis::Z => point.z = value,
    }
}
