//! The model capability interface.
//!
//! A preset provides its configuration record and overrides the evaluators it
//! cares about; everything else falls back to the defaults below. Evaluators
//! are pure functions of position, so a model can be queried concurrently by
//! the grid traversal without synchronization.

use nalgebra::Vector3;
use units::{Length, Temperature};

use crate::config::ModelParameters;
use crate::density::DensityTable;
use crate::error::ModelError;
use profiles::{DEFAULT_BETA, DEFAULT_REF_RADIUS_AU, DEFAULT_REF_SCALE_HEIGHT_AU};

/// A model preset: one configuration record plus position evaluators.
///
/// Positions are queried in the engine's SI frame (meters, model-centered
/// Cartesian coordinates). Density evaluators return *relative* values that
/// the grid builder normalizes against
/// [`gas_mass`](crate::config::ModelParameters::gas_mass); a model returning
/// a multi-row [`DensityTable`] must keep the table shape identical for every
/// position.
pub trait Model: Send + Sync {
    /// Registry name of the preset.
    fn name(&self) -> &'static str;

    /// The configuration record.
    fn parameters(&self) -> &ModelParameters;

    /// Applies the ordered extra-parameter tokens supplied at selection time.
    ///
    /// The default ignores the tokens (most presets take none) with a warning
    /// so a stray command-line argument does not vanish silently.
    fn use_extra_parameter(&mut self, extra: &[String]) -> Result<(), ModelError> {
        if !extra.is_empty() {
            log::warn!(
                "model '{}' takes no extra parameters, ignoring {:?}",
                self.name(),
                extra
            );
        }
        Ok(())
    }

    /// Relative gas density at a position.
    fn gas_density(&self, _position: &Vector3<f64>) -> DensityTable {
        DensityTable::zero()
    }

    /// Relative dust density at a position.
    ///
    /// The all-zero default tells the grid builder to derive dust from the
    /// gas density and the configured mass fraction.
    fn dust_density(&self, _position: &Vector3<f64>) -> DensityTable {
        DensityTable::zero()
    }

    /// Gas temperature at a position; 0 K leaves it to the solver.
    fn gas_temperature(&self, _position: &Vector3<f64>) -> Temperature {
        Temperature::zero()
    }

    /// Dust temperature at a position; 0 K leaves it to the solver.
    fn dust_temperature(&self, _position: &Vector3<f64>) -> Temperature {
        Temperature::zero()
    }

    /// Velocity field at a position, in m/s components.
    fn velocity_field(&self, _position: &Vector3<f64>) -> Vector3<f64> {
        Vector3::zeros()
    }

    /// Magnetic field at a position, in Tesla components.
    fn magnetic_field(&self, _position: &Vector3<f64>) -> Vector3<f64> {
        Vector3::zeros()
    }

    /// Dust composition index at a position.
    fn dust_id(&self, _position: &Vector3<f64>) -> usize {
        0
    }

    /// Local lower grain-size limit; `None` keeps the global limit.
    fn dust_min_size(&self, _position: &Vector3<f64>) -> Option<Length> {
        None
    }

    /// Local upper grain-size limit; `None` keeps the global limit.
    fn dust_max_size(&self, _position: &Vector3<f64>) -> Option<Length> {
        None
    }

    /// Disk scale height at a cylindrical radius, for scale-height-spaced
    /// vertical grids. The default is the canonical flaring power law.
    fn scale_height(&self, radius: Length) -> Length {
        Length::from_au(DEFAULT_REF_SCALE_HEIGHT_AU)
            * (radius / Length::from_au(DEFAULT_REF_RADIUS_AU)).powf(DEFAULT_BETA)
    }
}
