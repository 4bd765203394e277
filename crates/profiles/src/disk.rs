//! Shakura & Sunyaev (1973) disk density profile.
//!
//! The surface density follows a radial power law Σ ∝ r^(-p) and the vertical
//! structure is a Gaussian whose width flares outward:
//!
//! h(r) = h_ref · (r / r_ref)^β
//!
//! The midplane density combines both into
//!
//! ρ(r, z) ∝ (r / r_ref)^(-α) · exp(-z² / (2 h(r)²)),   α = β − p
//!
//! evaluated in cylindrical coordinates around the z axis.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use units::Length;

/// Default radial midplane exponent α
pub const DEFAULT_ALPHA: f64 = 2.625;

/// Default flaring exponent β
pub const DEFAULT_BETA: f64 = 1.125;

/// Default reference radius (au)
pub const DEFAULT_REF_RADIUS_AU: f64 = 100.0;

/// Default scale height at the reference radius (au)
pub const DEFAULT_REF_SCALE_HEIGHT_AU: f64 = 10.0;

/// Gaussian roll-off applied inside a given cylindrical radius.
///
/// Inside `radius` the density is multiplied by
/// exp(-(radius − r)² / (2 width²)), which tapers a sharp disk edge into a
/// smooth shoulder of the given width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianTaper {
    /// Cylindrical radius below which the roll-off applies
    pub radius: Length,
    /// Gaussian width of the roll-off
    pub width: Length,
}

/// A Shakura–Sunyaev disk density profile.
///
/// Evaluates a relative (unnormalized) density; the caller normalizes the
/// result to a total mass over the grid. With `real_zero` the density is
/// clamped to exactly 0 outside [`inner_radius`, `outer_radius`]; without it
/// the closed form extends smoothly across both edges.
///
/// # Examples
///
/// ```rust
/// use nalgebra::Vector3;
/// use profiles::DiskProfile;
/// use units::Length;
///
/// let disk = DiskProfile::new(Length::from_au(1.0), Length::from_au(300.0));
/// let midplane = disk.density(&Vector3::new(Length::from_au(50.0).to_m(), 0.0, 0.0));
/// assert!(midplane > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskProfile {
    /// Inner edge of the disk
    pub inner_radius: Length,
    /// Outer edge of the disk
    pub outer_radius: Length,
    /// Reference radius r_ref of the power laws
    pub ref_radius: Length,
    /// Scale height at the reference radius
    pub ref_scale_height: Length,
    /// Radial midplane exponent α
    pub alpha: f64,
    /// Flaring exponent β
    pub beta: f64,
    /// Clamp the density to exactly 0 outside the radial bounds
    pub real_zero: bool,
    /// Optional Gaussian roll-off inside a given radius
    pub taper: Option<GaussianTaper>,
}

impl DiskProfile {
    /// Creates a profile with the canonical reference values
    /// (r_ref = 100 au, h_ref = 10 au, α = 2.625, β = 1.125, hard edges).
    pub fn new(inner_radius: Length, outer_radius: Length) -> Self {
        Self {
            inner_radius,
            outer_radius,
            ref_radius: Length::from_au(DEFAULT_REF_RADIUS_AU),
            ref_scale_height: Length::from_au(DEFAULT_REF_SCALE_HEIGHT_AU),
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            real_zero: true,
            taper: None,
        }
    }

    /// Sets the surface density exponent p and the flaring exponent β,
    /// deriving the radial midplane exponent α = β − p.
    ///
    /// Observational disk fits usually quote p (negative for an outward
    /// falloff), so this is the natural way to parameterize the profile.
    pub fn with_exponents(mut self, surface_density_exponent: f64, beta: f64) -> Self {
        self.beta = beta;
        self.alpha = beta - surface_density_exponent;
        self
    }

    /// Scale height at a cylindrical radius: h(r) = h_ref · (r / r_ref)^β.
    pub fn scale_height(&self, radius: Length) -> Length {
        self.ref_scale_height * (radius / self.ref_radius).powf(self.beta)
    }

    /// Relative density at a position (meters).
    ///
    /// Returns exactly 0 outside the radial bounds when `real_zero` is set,
    /// and 0 on the axis itself where the radial power law has no value.
    pub fn density(&self, position: &Vector3<f64>) -> f64 {
        let radius_cy = (position.x * position.x + position.y * position.y).sqrt();

        if self.real_zero
            && (radius_cy < self.inner_radius.to_m() || radius_cy > self.outer_radius.to_m())
        {
            return 0.0;
        }
        if radius_cy <= 0.0 {
            return 0.0;
        }

        let scale_height = self.scale_height(Length::from_m(radius_cy)).to_m();
        let relative_radius = radius_cy / self.ref_radius.to_m();
        let mut density = relative_radius.powf(-self.alpha)
            * (-0.5 * (position.z / scale_height).powi(2)).exp();

        if let Some(taper) = self.taper {
            let edge = taper.radius.to_m();
            if radius_cy < edge {
                density *= (-0.5 * ((edge - radius_cy) / taper.width.to_m()).powi(2)).exp();
            }
        }

        density
    }
}
