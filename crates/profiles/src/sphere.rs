//! Spherically symmetric density primitives.

use nalgebra::Vector3;
use units::Length;

/// Constant-density ball.
///
/// Returns 1.0 everywhere inside `outer_radius` (including the origin) and
/// exactly 0 outside. The caller normalizes the result to a total mass.
pub fn sphere_density(position: &Vector3<f64>, outer_radius: Length) -> f64 {
    if position.norm() <= outer_radius.to_m() {
        1.0
    } else {
        0.0
    }
}

/// Truncated isothermal sphere in the Bonnor–Ebert manner.
///
/// Flat core inside `truncation_radius`, an r^(-2) envelope outside it, and
/// exactly 0 beyond `outer_radius`. Normalized to 1.0 at the core so the
/// caller can scale it to a total mass.
pub fn bonnor_ebert_density(
    position: &Vector3<f64>,
    outer_radius: Length,
    truncation_radius: Length,
) -> f64 {
    let radius = position.norm();
    if radius > outer_radius.to_m() {
        return 0.0;
    }
    let truncation = truncation_radius.to_m();
    if radius <= truncation {
        1.0
    } else {
        (truncation / radius).powi(2)
    }
}
