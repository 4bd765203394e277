//! MHD simulation imports.

use units::{Length, Mass};

use crate::config::{
    ConversionFactors, GasMass, GridType, ModelParameters, OctreeGrid, SphericalGrid,
};
use crate::model::Model;

/// Octree MHD snapshot import with cgs-Gauss conversion factors.
pub struct MhdBastian {
    parameters: ModelParameters,
}

impl MhdBastian {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(100.0),
            octree: OctreeGrid {
                sidelength: 2.0 * Length::from_pc(0.0125),
            },
            detector: Some("cartesian".to_string()),
            conversion: Some(ConversionFactors::cgs()),
            ..ModelParameters::default()
        };
        Self { parameters }
    }
}

impl Default for MhdBastian {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for MhdBastian {
    fn name(&self) -> &'static str {
        "mhd_bastian"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }
}

/// Circumbinary disk snapshot import on a dense spherical grid.
///
/// The radial step factor matches the snapshot's own cell spacing so the
/// imported values land on cell centers. Velocities in the snapshot are given
/// in units of the local sound speed.
pub struct MhdFlock {
    parameters: ModelParameters,
}

impl MhdFlock {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(100.0),
            inner_radius: Length::from_au(20.0),
            outer_radius: Length::from_au(100.0),
            grid: GridType::Spherical,
            spherical: SphericalGrid {
                n_r: 256,
                n_th: 562,
                n_ph: 512,
                sf_r: 1.0063066707156978,
                ..SphericalGrid::default()
            },
            gas_mass: GasMass::Total(Mass::from_solar_masses(1e-2)),
            external_input_name: Some("350".to_string()),
            vel_is_speed_of_sound: true,
            stellar_source: Some("binary".to_string()),
            dust_composition: Some("mrn_oblate".to_string()),
            detector: Some("cartesian".to_string()),
            ..ModelParameters::default()
        };
        Self { parameters }
    }
}

impl Default for MhdFlock {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for MhdFlock {
    fn name(&self) -> &'static str {
        "mhd_binary"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }
}
