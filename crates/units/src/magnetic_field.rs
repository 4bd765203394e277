use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Gauss in Tesla
pub const GAUSS_TO_TESLA: f64 = 1e-4;

const MICROGAUSS_TO_TESLA: f64 = 1e-10;

/// A magnetic flux density quantity using f64 precision.
///
/// The `MagneticField` struct represents field strengths with Tesla as the
/// base unit. MHD simulation output is usually given in Gauss, so a Gauss
/// constructor is provided for import conversion factors.
///
/// # Examples
///
/// ```rust
/// use units::MagneticField;
///
/// let import_factor = MagneticField::from_gauss(1.0);
/// assert_eq!(import_factor.to_tesla(), 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MagneticField(f64); // Base unit: Tesla

impl MagneticField {
    /// Creates a zero field value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `MagneticField` from a value in Tesla.
    pub fn from_tesla(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MagneticField` from a value in Gauss.
    pub fn from_gauss(value: f64) -> Self {
        Self(value * GAUSS_TO_TESLA)
    }

    /// Creates a new `MagneticField` from a value in microgauss.
    pub fn from_microgauss(value: f64) -> Self {
        Self(value * MICROGAUSS_TO_TESLA)
    }

    /// Returns the field strength in Tesla.
    pub fn to_tesla(&self) -> f64 {
        self.0
    }

    /// Converts the field strength to Gauss.
    pub fn to_gauss(&self) -> f64 {
        self.0 / GAUSS_TO_TESLA
    }
}

impl Add for MagneticField {
    type Output = MagneticField;

    fn add(self, rhs: MagneticField) -> MagneticField {
        MagneticField(self.0 + rhs.0)
    }
}

impl Sub for MagneticField {
    type Output = MagneticField;

    fn sub(self, rhs: MagneticField) -> MagneticField {
        MagneticField(self.0 - rhs.0)
    }
}

impl Mul<f64> for MagneticField {
    type Output = MagneticField;

    fn mul(self, rhs: f64) -> MagneticField {
        MagneticField(self.0 * rhs)
    }
}
