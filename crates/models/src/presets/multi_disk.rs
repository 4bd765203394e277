//! One disk profile normalized to two dust compositions.
//!
//! Both composition rows see the same relative density; their separate
//! gas-mass entries split the disk between a silicate and a PAH population.

use nalgebra::Vector3;
use profiles::DiskProfile;
use units::{Length, Mass};

use crate::config::{CylindricalGrid, GasMass, GridType, ModelParameters, SphericalGrid};
use crate::density::DensityTable;
use crate::model::Model;

/// Disk with a silicate and a PAH dust population sharing one density
/// structure.
pub struct MultiDisk {
    parameters: ModelParameters,
    disk: DiskProfile,
}

impl MultiDisk {
    pub fn new() -> Self {
        let inner_radius = Length::from_au(1.0);
        let outer_radius = Length::from_au(300.0);
        let parameters = ModelParameters {
            distance: Length::from_pc(140.0),
            inner_radius,
            outer_radius,
            grid: GridType::Spherical,
            // One thousandth of the silicate mass goes into the PAH population
            gas_mass: GasMass::PerRegion(vec![
                vec![Mass::from_solar_masses(1e-2)],
                vec![Mass::from_solar_masses(1e-2 * 1e-3)],
            ]),
            stellar_source: Some("t_tauri".to_string()),
            dust_composition: Some("silicate_pah".to_string()),
            gas_species: Some("co".to_string()),
            detector: Some("cartesian".to_string()),
            spherical: SphericalGrid {
                n_r: 100,
                n_th: 181,
                n_ph: 1,
                sf_r: 1.03,
                sf_th: 1.0,
                ..SphericalGrid::default()
            },
            cylindrical: CylindricalGrid {
                n_r: 100,
                n_z: 181,
                n_ph: 1,
                sf_r: 1.03,
                sf_z: 1.0,
                ..CylindricalGrid::default()
            },
            variable_dust: true,
            ..ModelParameters::default()
        };
        let disk = DiskProfile::new(inner_radius, outer_radius);
        Self { parameters, disk }
    }
}

impl Default for MultiDisk {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for MultiDisk {
    fn name(&self) -> &'static str {
        "multi_disk"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    fn gas_density(&self, position: &Vector3<f64>) -> DensityTable {
        let density = self.disk.density(position);
        DensityTable::from_rows(vec![vec![density], vec![density]])
    }
}
