//! Two-composition sphere for exercising the grid builder.
//!
//! The domain is split at half the outer radius: the inner zone carries the
//! first dust composition with small grains, the outer zone the second with a
//! much larger upper grain size. Useful for verifying per-cell dust ids and
//! size limits end to end.

use nalgebra::Vector3;
use profiles::sphere_density;
use units::{Length, Mass};

use crate::config::{GasMass, GridType, ModelParameters, SphericalGrid};
use crate::density::DensityTable;
use crate::model::Model;

/// Sphere test grid with position-dependent dust composition.
pub struct TestGrid {
    parameters: ModelParameters,
}

impl TestGrid {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(140.0),
            inner_radius: Length::from_au(0.1),
            outer_radius: Length::from_au(100.0),
            grid: GridType::Spherical,
            spherical: SphericalGrid {
                n_r: 100,
                n_th: 91,
                n_ph: 1,
                sf_r: 1.03,
                ..SphericalGrid::default()
            },
            gas_mass: GasMass::PerRegion(vec![
                vec![Mass::from_solar_masses(1e-6)],
                vec![Mass::from_solar_masses(1e-5)],
            ]),
            stellar_source: Some("t_tauri".to_string()),
            dust_composition: Some("silicate".to_string()),
            detector: Some("cartesian".to_string()),
            variable_dust: true,
            variable_size_limits: true,
            ..ModelParameters::default()
        };
        Self { parameters }
    }

    /// True inside the inner composition zone.
    fn in_inner_zone(&self, position: &Vector3<f64>) -> bool {
        position.norm() < 0.5 * self.parameters.outer_radius.to_m()
    }
}

impl Default for TestGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for TestGrid {
    fn name(&self) -> &'static str {
        "test"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    fn gas_density(&self, position: &Vector3<f64>) -> DensityTable {
        let sphere = sphere_density(position, self.parameters.outer_radius);
        if self.in_inner_zone(position) {
            DensityTable::from_rows(vec![vec![sphere], vec![0.0]])
        } else {
            DensityTable::from_rows(vec![vec![0.0], vec![sphere]])
        }
    }

    fn dust_id(&self, position: &Vector3<f64>) -> usize {
        if self.in_inner_zone(position) {
            0
        } else {
            1
        }
    }

    fn dust_min_size(&self, _position: &Vector3<f64>) -> Option<Length> {
        Some(Length::from_nanometers(5.0))
    }

    fn dust_max_size(&self, position: &Vector3<f64>) -> Option<Length> {
        if self.in_inner_zone(position) {
            Some(Length::from_microns(0.25))
        } else {
            Some(Length::from_m(0.001))
        }
    }
}
