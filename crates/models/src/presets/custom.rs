//! Template preset for user-defined models.
//!
//! Copy this file, adjust the parameters, override the evaluators you need,
//! and register the result in an owned
//! [`ModelCatalog`](crate::catalog::ModelCatalog).

use nalgebra::Vector3;
use units::{Length, Mass};

use crate::config::{GasMass, GridType, ModelParameters};
use crate::density::DensityTable;
use crate::model::Model;

/// A starting point for custom model definitions.
pub struct CustomModel {
    parameters: ModelParameters,
}

impl CustomModel {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(140.0),
            grid: GridType::Spherical,
            inner_radius: Length::from_au(0.1),
            outer_radius: Length::from_au(100.0),
            gas_mass: GasMass::Total(Mass::from_solar_masses(1e-2)),
            background_source: Some("bg_plane".to_string()),
            stellar_source: Some("t_tauri".to_string()),
            dust_composition: Some("mrn".to_string()),
            gas_species: Some("oh".to_string()),
            detector: Some("cartesian".to_string()),
            ..ModelParameters::default()
        };
        Self { parameters }
    }
}

impl Default for CustomModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for CustomModel {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    /// Constant unit density; replace with a position-dependent profile from
    /// the `profiles` crate as needed.
    fn gas_density(&self, _position: &Vector3<f64>) -> DensityTable {
        DensityTable::scalar(1.0)
    }
}
