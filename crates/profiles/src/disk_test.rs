use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::disk::{DiskProfile, GaussianTaper};
use units::Length;

fn au(value: f64) -> f64 {
    Length::from_au(value).to_m()
}

#[test]
fn hard_edges_are_exact_zeros() {
    let disk = DiskProfile::new(Length::from_au(1.0), Length::from_au(100.0));

    // Strictly inside the inner edge and strictly outside the outer edge
    assert_eq!(disk.density(&Vector3::new(au(0.5), 0.0, 0.0)), 0.0);
    assert_eq!(disk.density(&Vector3::new(au(100.5), 0.0, 0.0)), 0.0);

    // Just inside both edges the density is positive
    assert!(disk.density(&Vector3::new(au(1.5), 0.0, 0.0)) > 0.0);
    assert!(disk.density(&Vector3::new(au(99.5), 0.0, 0.0)) > 0.0);
}

#[test]
fn soft_edges_are_continuous() {
    let disk = DiskProfile {
        real_zero: false,
        ..DiskProfile::new(Length::from_au(1.0), Length::from_au(100.0))
    };

    // Densities a hair on either side of both edges agree to first order
    let eps = au(1e-4);
    let inner_in = disk.density(&Vector3::new(au(1.0) + eps, 0.0, 0.0));
    let inner_out = disk.density(&Vector3::new(au(1.0) - eps, 0.0, 0.0));
    assert_relative_eq!(inner_in, inner_out, max_relative = 1e-3);

    let outer_in = disk.density(&Vector3::new(au(100.0) - eps, 0.0, 0.0));
    let outer_out = disk.density(&Vector3::new(au(100.0) + eps, 0.0, 0.0));
    assert_relative_eq!(outer_in, outer_out, max_relative = 1e-3);
}

#[test]
fn axis_is_guarded() {
    let disk = DiskProfile {
        real_zero: false,
        ..DiskProfile::new(Length::from_au(1.0), Length::from_au(100.0))
    };

    // The radial power law has no value on the axis; the profile returns 0
    // instead of a non-finite float.
    let on_axis = disk.density(&Vector3::new(0.0, 0.0, au(10.0)));
    assert_eq!(on_axis, 0.0);
}

#[test]
fn midplane_follows_radial_power_law() {
    let disk = DiskProfile::new(Length::from_au(1.0), Length::from_au(300.0));

    let d_50 = disk.density(&Vector3::new(au(50.0), 0.0, 0.0));
    let d_100 = disk.density(&Vector3::new(au(100.0), 0.0, 0.0));

    // ρ(50)/ρ(100) = (50/100)^(-α)
    assert_relative_eq!(d_50 / d_100, 0.5_f64.powf(-disk.alpha), max_relative = 1e-12);

    // At the reference radius in the midplane the relative density is 1
    assert_relative_eq!(d_100, 1.0, max_relative = 1e-12);
}

#[test]
fn vertical_profile_is_gaussian_in_scale_heights() {
    let disk = DiskProfile::new(Length::from_au(1.0), Length::from_au(300.0));

    let radius = Length::from_au(100.0);
    let h = disk.scale_height(radius);
    let midplane = disk.density(&Vector3::new(radius.to_m(), 0.0, 0.0));
    let one_h = disk.density(&Vector3::new(radius.to_m(), 0.0, h.to_m()));

    assert_relative_eq!(one_h / midplane, (-0.5_f64).exp(), max_relative = 1e-12);
}

#[test]
fn scale_height_flares_outward() {
    let disk = DiskProfile::new(Length::from_au(1.0), Length::from_au(300.0));

    // h(r_ref) = h_ref by construction
    assert_relative_eq!(
        disk.scale_height(Length::from_au(100.0)).to_au(),
        10.0,
        max_relative = 1e-12
    );

    // β > 1 means the aspect ratio h/r grows outward
    let inner = disk.scale_height(Length::from_au(10.0)).to_au() / 10.0;
    let outer = disk.scale_height(Length::from_au(200.0)).to_au() / 200.0;
    assert!(outer > inner);
}

#[test]
fn exponents_derive_alpha_from_surface_density() {
    let disk = DiskProfile::new(Length::from_au(180.0), Length::from_au(260.0))
        .with_exponents(-1.7, 1.05);

    // α = β − p
    assert_relative_eq!(disk.alpha, 2.75);
    assert_relative_eq!(disk.beta, 1.05);
}

#[test]
fn taper_rolls_off_inside_edge() {
    let plain = DiskProfile::new(Length::from_au(1.0), Length::from_au(300.0));
    let tapered = DiskProfile {
        taper: Some(GaussianTaper {
            radius: Length::from_au(190.0),
            width: Length::from_au(2.0),
        }),
        ..plain
    };

    // Outside the taper radius both profiles agree
    let far = Vector3::new(au(250.0), 0.0, 0.0);
    assert_relative_eq!(tapered.density(&far), plain.density(&far));

    // One width inside the edge the density is reduced by exp(-1/2)
    let near = Vector3::new(au(188.0), 0.0, 0.0);
    assert_relative_eq!(
        tapered.density(&near) / plain.density(&near),
        (-0.5_f64).exp(),
        max_relative = 1e-12
    );
}
