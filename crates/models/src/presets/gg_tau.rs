//! The GG Tau A system.
//!
//! A circumbinary ring superposed with three circumstellar disks around the
//! components Aa, Ab1, and Ab2 (Duchêne et al. 2004). Each component is a
//! Shakura & Sunyaev (1973) profile evaluated in its own translated and
//! tilted frame; the combination is a plain sum with per-component scale
//! factors.

use std::f64::consts::PI;

use nalgebra::Vector3;
use profiles::{exp_list, lin_list, rotate_about_axis, DiskProfile, GaussianTaper};
use units::{Length, Mass};

use crate::config::{GasMass, GridType, ModelParameters, SphericalGrid};
use crate::density::DensityTable;
use crate::model::Model;

/// Circumbinary + circumstellar disks of GG Tau A.
pub struct GGTauDisk {
    parameters: ModelParameters,
    /// Ring between 180 and 260 au with a tapered inner shoulder
    circumbinary: DiskProfile,
    disk_aa: DiskProfile,
    disk_ab1: DiskProfile,
    disk_ab2: DiskProfile,
    /// Scale factors calibrated to the component dust masses
    scale_cb: f64,
    scale_aa: f64,
    scale_ab: f64,
    /// Projected half-separations of Aa–Ab and Ab1–Ab2
    separation_aab: Length,
    separation_ab12: Length,
    /// Position angles of Aa and of the Ab pair
    angle_aa: f64,
    angle_ab12: f64,
    /// Inclination of the circumstellar disks against the ring midplane
    tilt: f64,
}

impl GGTauDisk {
    pub fn new() -> Self {
        let mass_fraction = 0.01;

        // Hand-built radial cells: a fine linear section across the
        // circumstellar disks, a seam, and an exponential section across the
        // circumbinary ring.
        let mut radii = lin_list(10.0, 30.0, 200);
        radii.push(140.0);
        radii.extend(exp_list(180.0, 300.0, 100, 1.03));
        let radius_list: Vec<Length> = radii.into_iter().map(Length::from_au).collect();
        let n_r = radius_list.len() - 1;

        let parameters = ModelParameters {
            distance: Length::from_pc(140.0),
            grid: GridType::Spherical,
            // Total dust mass of 0.0013 M_sun scaled up to gas
            gas_mass: GasMass::Total(Mass::from_solar_masses(0.0013) / mass_fraction),
            mass_fraction,
            stellar_source: Some("gg_tau_stars".to_string()),
            dust_composition: Some("silicate".to_string()),
            detector: Some("gg_tau".to_string()),
            inner_radius: Length::from_au(10.0),
            outer_radius: Length::from_au(300.0),
            spherical: SphericalGrid {
                n_r,
                n_th: 91,
                n_ph: 720,
                sf_r: 0.0,
                sf_th: 1.0,
                radius_list: Some(radius_list),
                ..SphericalGrid::default()
            },
            ..ModelParameters::default()
        };

        let circumbinary = DiskProfile {
            ref_radius: Length::from_au(180.0),
            ref_scale_height: Length::from_au(32.0),
            taper: Some(GaussianTaper {
                radius: Length::from_au(190.0),
                width: Length::from_au(2.0),
            }),
            ..DiskProfile::new(Length::from_au(180.0), Length::from_au(260.0))
                .with_exponents(-1.7, 1.05)
        };

        let circumstellar = |outer_au: f64| DiskProfile {
            ref_scale_height: Length::from_au(20.0),
            ..DiskProfile::new(Length::from_au(0.15), Length::from_au(outer_au))
        };

        Self {
            parameters,
            circumbinary,
            disk_aa: circumstellar(7.0),
            disk_ab1: circumstellar(2.0),
            disk_ab2: circumstellar(2.0),
            scale_cb: 1.082494125545485 * 1.0079425074596415,
            scale_aa: 2.494246485180343 * 0.5061500961721862,
            scale_ab: 0.25762784158640205 * 0.32974081598463123,
            separation_aab: Length::from_au(36.0 / 2.0),
            separation_ab12: Length::from_au(4.5 / 2.0),
            angle_aa: 3.0 / 2.0 * PI,
            angle_ab12: 3.0 / 2.0 * PI + PI,
            tilt: 20.0 / 180.0 * PI,
        }
    }

    /// Position in the tilted frame of a circumstellar disk, given the
    /// cylindrical radius around that disk's own star.
    fn tilted(&self, radius_cy: f64, z: f64, tilt: f64) -> Vector3<f64> {
        rotate_about_axis(&Vector3::new(radius_cy, 0.0, z), &Vector3::y(), tilt)
    }
}

impl Default for GGTauDisk {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for GGTauDisk {
    fn name(&self) -> &'static str {
        "gg_tau_disk"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    fn gas_density(&self, position: &Vector3<f64>) -> DensityTable {
        let offset_aa = self.separation_aab.to_m() * self.angle_aa.sin();
        let offset_ab = self.separation_aab.to_m() * self.angle_ab12.sin();
        let half_ab12 = self.separation_ab12.to_m();

        // Cylindrical radii around each stellar component
        let radius_aa =
            (position.x.powi(2) + (position.y - offset_aa).powi(2)).sqrt();
        let radius_ab1 =
            ((position.x + half_ab12).powi(2) + (position.y - offset_ab).powi(2)).sqrt();
        let radius_ab2 =
            ((position.x - half_ab12).powi(2) + (position.y - offset_ab).powi(2)).sqrt();

        let density_aa = self.scale_aa
            * self
                .disk_aa
                .density(&self.tilted(radius_aa, position.z, self.tilt));
        let density_ab1 = self.scale_ab
            * self
                .disk_ab1
                .density(&self.tilted(radius_ab1, position.z, self.tilt));
        let density_ab2 = self.scale_ab
            * self
                .disk_ab2
                .density(&self.tilted(radius_ab2, position.z, -self.tilt));
        let density_cb = self.scale_cb * self.circumbinary.density(position);

        DensityTable::scalar(density_cb + density_aa + density_ab1 + density_ab2)
    }
}

/// A single circumstellar disk of the GG Tau system, for imaging one
/// component on its own.
pub struct GGTauCircumstellarDisk {
    parameters: ModelParameters,
    disk: DiskProfile,
}

impl GGTauCircumstellarDisk {
    pub fn new() -> Self {
        let inner_radius = Length::from_au(0.07);
        let outer_radius = Length::from_au(2.0);
        let parameters = ModelParameters {
            distance: Length::from_pc(140.0),
            grid: GridType::Spherical,
            inner_radius,
            outer_radius,
            spherical: SphericalGrid {
                n_r: 100,
                n_th: 91,
                n_ph: 1,
                sf_r: 1.03,
                sf_th: 1.0,
                ..SphericalGrid::default()
            },
            // Disk mass of one Ab component; Aa carries 0.01 M_sun
            gas_mass: GasMass::Total(Mass::from_solar_masses(0.0015)),
            stellar_source: Some("t_tauri".to_string()),
            dust_composition: Some("silicate".to_string()),
            detector: Some("cartesian".to_string()),
            ..ModelParameters::default()
        };
        let disk = DiskProfile {
            ref_scale_height: Length::from_au(20.0),
            ..DiskProfile::new(inner_radius, outer_radius)
        };
        Self { parameters, disk }
    }
}

impl Default for GGTauCircumstellarDisk {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for GGTauCircumstellarDisk {
    fn name(&self) -> &'static str {
        "gg_cs_disk"
    }

    fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    fn gas_density(&self, position: &Vector3<f64>) -> DensityTable {
        DensityTable::scalar(self.disk.density(position))
    }
}
