//! The ringed disk around HD 97048.
//!
//! A compact inner disk plus three rings, each a Shakura & Sunyaev (1973)
//! profile with hard edges. The dust is split between olivine and PAH
//! compositions; extra parameters switch between the ring-confined and the
//! continuum PAH variant and set the PAH mass fraction.

use nalgebra::Vector3;
use profiles::DiskProfile;
use units::{Length, Mass};

use crate::config::{CylindricalGrid, GasMass, GridType, ModelParameters, SphericalGrid};
use crate::density::DensityTable;
use crate::error::ModelError;
use crate::model::Model;

const DEFAULT_MF_PAH: f64 = 1e-3;

/// Ringed disk with a switchable PAH continuum component.
pub struct Hd97048 {
    parameters: ModelParameters,
    inner_disk: DiskProfile,
    ring_1: DiskProfile,
    ring_2: DiskProfile,
    ring_3: DiskProfile,
    /// Ring-exponent profile spanning all rings, used for the PAH continuum
    continuum: DiskProfile,
    /// Include the PAH continuum as a third composition
    use_cont: bool,
    /// PAH mass fraction of the ring dust
    mf_pah: f64,
}

impl Hd97048 {
    pub fn new() -> Self {
        let parameters = ModelParameters {
            distance: Length::from_pc(185.0),
            inner_radius: Length::from_au(0.3),
            outer_radius: Length::from_au(400.0),
            grid: GridType::Cylindrical,
            spherical: SphericalGrid {
                n_r: 300,
                n_th: 141,
                n_ph: 1,
                sf_r: 1.04,
                sf_th: 1.0,
                ..SphericalGrid::default()
            },
            cylindrical: CylindricalGrid {
                n_r: 300,
                n_z: 142,
                n_ph: 1,
                sf_r: 1.04,
                sf_z: -1.0,
                ..CylindricalGrid::default()
            },
            detector: Some("hd97048".to_string()),
            stellar_source: Some("hd97048".to_string()),
            dust_composition: Some("olivine_pah".to_string()),
            variable_dust: true,
            ..ModelParameters::default()
        };

        let inner_disk = DiskProfile {
            ref_scale_height: Length::from_au(5.0),
            ..DiskProfile::new(Length::from_au(0.3), Length::from_au(2.6))
                .with_exponents(-1.0, 1.0)
        };
        let ring = |inner_au: f64, outer_au: f64| DiskProfile {
            ref_scale_height: Length::from_au(12.0),
            ..DiskProfile::new(Length::from_au(inner_au), Length::from_au(outer_au))
                .with_exponents(-0.5, 1.26)
        };

        let mut model = Self {
            parameters,
            inner_disk,
            ring_1: ring(41.0, 51.0),
            ring_2: ring(155.0, 165.0),
            ring_3: ring(269.0, 400.0),
            continuum: ring(41.0, 400.0),
            use_cont: false,
            mf_pah: DEFAULT_MF_PAH,
        };
        model.apply_composition();
        model
    }

    /// Include the PAH continuum as a third composition row.
    pub fn use_cont(&self) -> bool {
        self.use_cont
    }

    /// PAH mass fraction of the ring dust.
    pub fn mf_pah(&self) -> f64 {
        self.mf_pah
    }

    /// Rebuilds the gas-mass table from the current PAH flags. Rows are dust
    /// compositions, entries are the radial zones (inner disk, rings).
    fn apply_composition(&mut self) {
        let m = Mass::from_solar_masses;
        self.parameters.gas_mass = if self.use_cont {
            GasMass::PerRegion(vec![
                vec![m(1e-4), m(4e-3), m(5e-3), m(1e-1), m(0.0)],
                vec![m(0.0), m(0.0), m(0.0), m(0.0), m(0.2 * self.mf_pah)],
                vec![m(0.0), m(0.0), m(0.0), m(0.0), m(0.8 * self.mf_pah)],
            ])
        } else {
            let olivine = 1.0 - self.mf_pah;
            GasMass::PerRegion(vec![
                vec![
                    m(1e-4),
                    m(olivine * 4e-3),
                    m(olivine * 5e-3),
                    m(olivine * 1e-1),
                ],
                vec![
                    m(0.0),
                    m(self.mf_pah * 4e-3),
                    m(self.mf_pah * 5e-3),
                    m(self.mf_pah * 1e-1),
                ],
            ])
        };
    }

    fn parse_flag(&self, token: &str) -> Result<bool, ModelError> {
        token
            .parse::<i64>()
            .map(|value| value != 0)
            .map_err(|_| ModelError::InvalidExtraParameter {
                model: self.name(),
                reason: format!("expected an integer flag, got '{token}'"),
            })
    }

    fn parse_fraction(&self, token: &str) -> Result<f64, ModelError> {
        token
            .parse::<f64>()
            .map_err(|_| ModelError::InvalidExtraParameter {
                model: self.name(),
                reason: format!("expected a mass fraction, got '{token}'"),
            })
    }
}

impl Default for Hd97048 {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Hd97048 {
    fn name(&self) -> &'static str {
        "hd97048"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    /// Tokens: `[use_cont]` or `[use_cont, mf_pah]`. Any other arity falls
    /// back to the defaults, matching the historical command-line behavior.
    fn use_extra_parameter(&mut self, extra: &[String]) -> Result<(), ModelError> {
        match extra {
            [flag, fraction] => {
                self.use_cont = self.parse_flag(flag)?;
                self.mf_pah = self.parse_fraction(fraction)?;
            }
            [flag] => {
                self.use_cont = self.parse_flag(flag)?;
                self.mf_pah = DEFAULT_MF_PAH;
            }
            [] => {
                self.use_cont = false;
                self.mf_pah = DEFAULT_MF_PAH;
            }
            _ => {
                log::warn!(
                    "model '{}' expects at most 2 extra parameters, got {}; using defaults",
                    self.name(),
                    extra.len()
                );
                self.use_cont = false;
                self.mf_pah = DEFAULT_MF_PAH;
            }
        }
        self.apply_composition();
        Ok(())
    }

    fn gas_density(&self, position: &Vector3<f64>) -> DensityTable {
        let inner = self.inner_disk.density(position);
        let ring_1 = self.ring_1.density(position);
        let ring_2 = self.ring_2.density(position);
        let ring_3 = self.ring_3.density(position);

        if self.use_cont {
            let continuum = self.continuum.density(position);
            DensityTable::from_rows(vec![
                vec![inner, ring_1, ring_2, ring_3, 0.0],
                vec![0.0, 0.0, 0.0, 0.0, continuum],
                vec![0.0, 0.0, 0.0, 0.0, continuum],
            ])
        } else {
            DensityTable::from_rows(vec![
                vec![inner, ring_1, ring_2, ring_3],
                vec![0.0, ring_1, ring_2, ring_3],
            ])
        }
    }

    /// Two-regime scale height: the compact inner disk is flatter than the
    /// rings.
    fn scale_height(&self, radius: Length) -> Length {
        if self.inner_disk.inner_radius <= radius && radius <= self.inner_disk.outer_radius {
            self.inner_disk.scale_height(radius)
        } else {
            self.ring_1.scale_height(radius)
        }
    }
}
