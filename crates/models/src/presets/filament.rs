//! Imported filament simulation on an octree grid.

use units::Length;

use crate::config::{ConversionFactors, ModelParameters, OctreeGrid};
use crate::model::Model;

/// Filament snapshot import. The density structure comes from the external
/// grid file; this preset only supplies the domain extent and the cgs-Gauss
/// conversion factors.
pub struct Filament {
    parameters: ModelParameters,
}

impl Filament {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(100.0),
            octree: OctreeGrid {
                sidelength: Length::from_m(2.0 * 4.7305e17),
            },
            detector: Some("cartesian".to_string()),
            conversion: Some(ConversionFactors::cgs()),
            ..ModelParameters::default()
        };
        Self { parameters }
    }
}

impl Default for Filament {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Filament {
    fn name(&self) -> &'static str {
        "filament"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }
}
