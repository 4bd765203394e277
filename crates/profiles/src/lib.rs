//! Closed-form density, field, and spacing primitives shared by the
//! radiative-transfer model presets.
//!
//! Everything here is a pure function of position and configuration: no
//! state, no allocation beyond returned lists, safe to call from any thread.

pub mod disk;
pub mod field;
pub mod spacing;
pub mod sphere;

#[cfg(test)]
mod disk_test;
#[cfg(test)]
mod field_test;
#[cfg(test)]
mod sphere_test;

pub use disk::{
    DiskProfile, GaussianTaper, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_REF_RADIUS_AU,
    DEFAULT_REF_SCALE_HEIGHT_AU,
};
pub use field::{rotate_about_axis, uniform_field, Axis};
pub use spacing::{exp_list, lin_list};
pub use sphere::{bonnor_ebert_density, sphere_density};
