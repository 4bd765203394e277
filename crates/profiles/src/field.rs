//! Vector field primitives: uniform magnetic fields and frame rotation.

use nalgebra::{Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use units::MagneticField;

/// A coordinate axis of the model frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit_vector(&self) -> Vector3<f64> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

/// Uniform magnetic field of the given strength along a coordinate axis,
/// in Tesla components.
pub fn uniform_field(strength: MagneticField, axis: Axis) -> Vector3<f64> {
    axis.unit_vector() * strength.to_tesla()
}

/// Rotates a position about an arbitrary axis through the origin.
///
/// Used to evaluate a profile in the frame of a body whose midplane is
/// inclined against the model frame. `angle` is in radians; the axis need
/// not be normalized.
pub fn rotate_about_axis(position: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle);
    rotation * *position
}
