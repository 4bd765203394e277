use approx::assert_relative_eq;
use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::field::{rotate_about_axis, uniform_field, Axis};
use units::MagneticField;

#[test]
fn uniform_field_points_along_axis() {
    let field = uniform_field(MagneticField::from_tesla(1e-10), Axis::Z);

    assert_eq!(field.x, 0.0);
    assert_eq!(field.y, 0.0);
    assert_relative_eq!(field.z, 1e-10);
}

#[test]
fn uniform_field_gauss_roundtrip() {
    let field = uniform_field(MagneticField::from_gauss(1.0), Axis::X);
    assert_relative_eq!(field.x, 1e-4);
}

#[test]
fn rotation_preserves_length() {
    let position = Vector3::new(3.0, -4.0, 12.0);
    let rotated = rotate_about_axis(&position, &Vector3::new(1.0, 1.0, 0.0), 0.7);
    assert_relative_eq!(rotated.norm(), position.norm(), max_relative = 1e-12);
}

#[test]
fn quarter_turn_about_y() {
    let position = Vector3::new(1.0, 0.0, 0.0);
    let rotated = rotate_about_axis(&position, &Vector3::y(), FRAC_PI_2);

    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.z, -1.0, max_relative = 1e-12);
}

#[test]
fn full_turn_is_identity() {
    let position = Vector3::new(0.3, 1.7, -2.2);
    let rotated = rotate_about_axis(&position, &Vector3::z(), 2.0 * PI);

    assert_relative_eq!(rotated.x, position.x, max_relative = 1e-12);
    assert_relative_eq!(rotated.y, position.y, max_relative = 1e-12);
    assert_relative_eq!(rotated.z, position.z, max_relative = 1e-12);
}
