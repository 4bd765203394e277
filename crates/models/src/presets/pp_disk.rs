//! The default protoplanetary disk.
//!
//! Shakura & Sunyaev (1973) profile with a slightly flattened radial
//! exponent, used as the baseline for parameter studies where stellar source,
//! dust composition, and grain sizes are varied from the command line.

use nalgebra::Vector3;
use profiles::DiskProfile;
use units::{Length, Mass};

use crate::config::{GasMass, GridType, ModelParameters, SphericalGrid};
use crate::density::DensityTable;
use crate::model::Model;

/// Baseline Shakura–Sunyaev protoplanetary disk.
pub struct ProtoplanetaryDisk {
    parameters: ModelParameters,
    disk: DiskProfile,
}

impl ProtoplanetaryDisk {
    pub fn new() -> Self {
        let inner_radius = Length::from_au(1.0);
        let outer_radius = Length::from_au(300.0);
        let parameters = ModelParameters {
            distance: Length::from_pc(140.0),
            inner_radius,
            outer_radius,
            grid: GridType::Spherical,
            spherical: SphericalGrid {
                n_r: 100,
                n_th: 182,
                n_ph: 1,
                sf_r: 1.058,
                ..SphericalGrid::default()
            },
            gas_mass: GasMass::Total(Mass::from_solar_masses(1e-4)),
            stellar_source: Some("t_tauri".to_string()),
            dust_composition: Some("silicate".to_string()),
            detector: Some("cartesian".to_string()),
            ..ModelParameters::default()
        };
        let disk = DiskProfile {
            alpha: 1.625,
            ..DiskProfile::new(inner_radius, outer_radius)
        };
        Self { parameters, disk }
    }
}

impl Default for ProtoplanetaryDisk {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for ProtoplanetaryDisk {
    fn name(&self) -> &'static str {
        "pp_disk"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    fn gas_density(&self, position: &Vector3<f64>) -> DensityTable {
        DensityTable::scalar(self.disk.density(position))
    }
}
