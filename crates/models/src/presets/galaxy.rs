//! Imported galaxy simulation.

use units::Length;

use crate::config::{ConversionFactors, ModelParameters};
use crate::model::Model;

/// Galaxy snapshot import. Densities, fields, and velocities come from the
/// external grid; only the conversion factors live here. The density factor
/// carries the snapshot's own mass normalization on top of g/cm³ → kg/m³.
pub struct Galaxy {
    parameters: ModelParameters,
}

impl Galaxy {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(100.0),
            dust_composition: Some("mrn".to_string()),
            detector: Some("cartesian".to_string()),
            conversion: Some(ConversionFactors {
                density: 6195019.204559535,
                ..ConversionFactors::cgs()
            }),
            ..ModelParameters::default()
        };
        Self { parameters }
    }
}

impl Default for Galaxy {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Galaxy {
    fn name(&self) -> &'static str {
        "galaxy"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }
}
