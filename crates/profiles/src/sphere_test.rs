use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::sphere::{bonnor_ebert_density, sphere_density};
use units::Length;

#[test]
fn sphere_includes_origin() {
    let outer = Length::from_au(100.0);
    assert_eq!(sphere_density(&Vector3::zeros(), outer), 1.0);
}

#[test]
fn sphere_is_zero_outside() {
    let outer = Length::from_au(100.0);
    let outside = Vector3::new(Length::from_au(101.0).to_m(), 0.0, 0.0);
    assert_eq!(sphere_density(&outside, outer), 0.0);
}

#[test]
fn sphere_boundary_is_inclusive() {
    let outer = Length::from_au(100.0);
    let edge = Vector3::new(outer.to_m(), 0.0, 0.0);
    assert_eq!(sphere_density(&edge, outer), 1.0);
}

#[test]
fn bonnor_ebert_core_and_envelope() {
    let outer = Length::from_au(1e4);
    let truncation = Length::from_au(100.0);

    // Flat core
    let core = bonnor_ebert_density(&Vector3::zeros(), outer, truncation);
    assert_eq!(core, 1.0);

    // r^(-2) envelope: four times the truncation radius gives 1/16
    let envelope = Vector3::new(Length::from_au(400.0).to_m(), 0.0, 0.0);
    assert_relative_eq!(
        bonnor_ebert_density(&envelope, outer, truncation),
        1.0 / 16.0,
        max_relative = 1e-12
    );

    // Nothing beyond the outer radius
    let beyond = Vector3::new(Length::from_au(1.1e4).to_m(), 0.0, 0.0);
    assert_eq!(bonnor_ebert_density(&beyond, outer, truncation), 0.0);
}
