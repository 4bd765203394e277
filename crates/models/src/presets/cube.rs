//! A cube of constant density on an octree grid.

use nalgebra::Vector3;
use profiles::{uniform_field, Axis};
use units::{Length, MagneticField, Mass, Temperature};

use crate::config::{GasMass, ModelParameters, OctreeGrid};
use crate::density::DensityTable;
use crate::model::Model;

/// Constant-density test cube with a fixed temperature and a weak uniform
/// vertical magnetic field.
pub struct Cube {
    parameters: ModelParameters,
}

impl Cube {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(140.0),
            gas_mass: GasMass::Total(Mass::from_solar_masses(1e-6)),
            octree: OctreeGrid {
                sidelength: Length::from_au(200.0),
            },
            stellar_source: Some("t_tauri".to_string()),
            dust_composition: Some("mrn_oblate".to_string()),
            detector: Some("cartesian".to_string()),
            ..ModelParameters::default()
        };
        Self { parameters }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Cube {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    fn gas_density(&self, _position: &Vector3<f64>) -> DensityTable {
        DensityTable::scalar(1.0)
    }

    fn gas_temperature(&self, _position: &Vector3<f64>) -> Temperature {
        Temperature::from_kelvin(10.0)
    }

    fn dust_temperature(&self, _position: &Vector3<f64>) -> Temperature {
        Temperature::from_kelvin(10.0)
    }

    fn magnetic_field(&self, _position: &Vector3<f64>) -> Vector3<f64> {
        uniform_field(MagneticField::from_tesla(1e-10), Axis::Z)
    }
}
