use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Astronomical unit in meters (IAU 2012 definition)
pub const AU_TO_M: f64 = 1.495978707e11;

/// Parsec in meters
pub const PC_TO_M: f64 = 3.0856775814913673e16;

/// Kilometer in meters
pub const KM_TO_M: f64 = 1e3;

const CM_TO_M: f64 = 1e-2;
const MICRON_TO_M: f64 = 1e-6;
const NANOMETER_TO_M: f64 = 1e-9;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with meters as the base unit,
/// matching the SI frame in which grid positions are queried. Constructors
/// exist for the scales that occur in model setup, from dust grain sizes
/// (nanometers) up to source distances (parsecs).
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let distance = Length::from_pc(140.0);
/// let disk_edge = Length::from_au(100.0);
/// let grain = Length::from_nanometers(5.0);
///
/// let edge_in_m = disk_edge.to_m();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_m(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value * CM_TO_M)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    /// Creates a new `Length` from a value in parsecs.
    pub fn from_pc(value: f64) -> Self {
        Self(value * PC_TO_M)
    }

    /// Creates a new `Length` from a value in microns.
    pub fn from_microns(value: f64) -> Self {
        Self(value * MICRON_TO_M)
    }

    /// Creates a new `Length` from a value in nanometers.
    pub fn from_nanometers(value: f64) -> Self {
        Self(value * NANOMETER_TO_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 / CM_TO_M
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }

    /// Converts the length to parsecs.
    pub fn to_pc(&self) -> f64 {
        self.0 / PC_TO_M
    }

    /// Converts the length to microns.
    pub fn to_microns(&self) -> f64 {
        self.0 / MICRON_TO_M
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
