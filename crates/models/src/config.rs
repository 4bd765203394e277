//! Typed configuration records shared by every model preset.
//!
//! Each preset fills one [`ModelParameters`] in its constructor, multiplying
//! every numeric value with a named unit constructor so no implicit unit ever
//! reaches the grid builder. Collaborator selectors (stellar source, dust
//! composition, ...) stay plain strings: they index registries owned by the
//! surrounding tool, not by this crate.

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// Geometry of the simulation grid a model is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridType {
    Spherical,
    Cylindrical,
    Octree,
}

impl GridType {
    /// Lowercase name used by the surrounding tool's CLI.
    pub fn name(&self) -> &'static str {
        match self {
            GridType::Spherical => "spherical",
            GridType::Cylindrical => "cylindrical",
            GridType::Octree => "octree",
        }
    }
}

/// Cell counts and spacing factors of a spherical grid.
///
/// Spacing conventions for `sf_th`: -1 is linear, 1 is sine-shaped, any other
/// value is an exponential step width. `sf_r > 1` is an exponential radial
/// step factor; `sf_r == 0` selects the explicit `radius_list` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphericalGrid {
    pub n_r: usize,
    pub n_th: usize,
    pub n_ph: usize,
    pub sf_r: f64,
    pub sf_th: f64,
    pub sf_ph: f64,
    /// Explicit radial cell boundaries, used when `sf_r == 0`
    pub radius_list: Option<Vec<Length>>,
}

impl Default for SphericalGrid {
    fn default() -> Self {
        Self {
            n_r: 100,
            n_th: 91,
            n_ph: 1,
            sf_r: 1.03,
            sf_th: -1.0,
            sf_ph: 1.0,
            radius_list: None,
        }
    }
}

/// Cell counts and spacing factors of a cylindrical grid.
///
/// `sf_z` follows the same convention as `sf_th`; -1 spaces the vertical
/// cells with the model's [`scale_height`](crate::model::Model::scale_height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylindricalGrid {
    pub n_r: usize,
    pub n_z: usize,
    pub n_ph: usize,
    pub sf_r: f64,
    pub sf_z: f64,
    pub sf_ph: f64,
}

impl Default for CylindricalGrid {
    fn default() -> Self {
        Self {
            n_r: 100,
            n_z: 91,
            n_ph: 1,
            sf_r: 1.03,
            sf_z: -1.0,
            sf_ph: 1.0,
        }
    }
}

/// Extent of an octree grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctreeGrid {
    /// Full side length of the cubic domain
    pub sidelength: Length,
}

impl Default for OctreeGrid {
    fn default() -> Self {
        Self {
            sidelength: Length::zero(),
        }
    }
}

/// Multiplicative unit conversions applied when importing an externally
/// generated simulation grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactors {
    /// Density factor (e.g. g/cm³ → kg/m³)
    pub density: f64,
    /// Length factor (e.g. cm → m)
    pub length: f64,
    /// Magnetic field factor (e.g. Gauss → Tesla)
    pub magnetic_field: f64,
    /// Velocity factor (e.g. cm/s → m/s)
    pub velocity: f64,
}

impl ConversionFactors {
    /// Factors for MHD output in cgs-Gauss units.
    pub fn cgs() -> Self {
        Self {
            density: 1e3,
            length: 1e-2,
            magnetic_field: 1e-4,
            velocity: 1e-2,
        }
    }
}

/// Total gas mass of a model.
///
/// Either one scalar for the whole domain, or a ragged table whose shape
/// matches the model's [`DensityTable`](crate::density::DensityTable): one row
/// per dust composition, one entry per sub-region normalized on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GasMass {
    Total(Mass),
    PerRegion(Vec<Vec<Mass>>),
}

impl GasMass {
    /// Mass summed over all compositions and sub-regions.
    pub fn total(&self) -> Mass {
        match self {
            GasMass::Total(mass) => *mass,
            GasMass::PerRegion(rows) => rows
                .iter()
                .flatten()
                .fold(Mass::zero(), |sum, &mass| sum + mass),
        }
    }

    /// Number of dust compositions (outer dimension).
    pub fn num_compositions(&self) -> usize {
        match self {
            GasMass::Total(_) => 1,
            GasMass::PerRegion(rows) => rows.len(),
        }
    }

    /// Row lengths, outer to inner, for shape comparisons.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            GasMass::Total(_) => vec![1],
            GasMass::PerRegion(rows) => rows.iter().map(Vec::len).collect(),
        }
    }
}

/// The configuration record shared by every model preset.
///
/// Constructed once when a preset is selected and immutable afterwards except
/// for the one-time extra-parameter step
/// ([`use_extra_parameter`](crate::model::Model::use_extra_parameter)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Distance from the observer to the model
    pub distance: Length,
    /// Inner radial edge of the density setup
    pub inner_radius: Length,
    /// Outer radial edge of the density setup
    pub outer_radius: Length,
    /// Total gas mass the densities are normalized to
    pub gas_mass: GasMass,
    /// Dust-to-gas mass ratio used when no explicit dust density is defined
    pub mass_fraction: f64,
    /// Grid geometry this preset is written for
    pub grid: GridType,
    pub spherical: SphericalGrid,
    pub cylindrical: CylindricalGrid,
    pub octree: OctreeGrid,
    /// Unit conversions for imported simulation grids
    pub conversion: Option<ConversionFactors>,
    /// Default stellar source selection
    pub stellar_source: Option<String>,
    /// Default background source selection
    pub background_source: Option<String>,
    /// Default dust composition selection
    pub dust_composition: Option<String>,
    /// Default gas species selection
    pub gas_species: Option<String>,
    /// Default detector selection
    pub detector: Option<String>,
    /// Identifier of an external input snapshot to import
    pub external_input_name: Option<String>,
    /// Dust composition varies with position (`dust_id` is meaningful)
    pub variable_dust: bool,
    /// Grain size limits vary with position
    pub variable_size_limits: bool,
    /// Imported velocities are in units of the local sound speed
    pub vel_is_speed_of_sound: bool,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            distance: Length::from_pc(140.0),
            inner_radius: Length::from_au(0.1),
            outer_radius: Length::from_au(100.0),
            gas_mass: GasMass::Total(Mass::from_solar_masses(1e-2)),
            mass_fraction: 0.01,
            grid: GridType::Octree,
            spherical: SphericalGrid::default(),
            cylindrical: CylindricalGrid::default(),
            octree: OctreeGrid::default(),
            conversion: None,
            stellar_source: None,
            background_source: None,
            dust_composition: None,
            gas_species: None,
            detector: None,
            external_input_name: None,
            variable_dust: false,
            variable_size_limits: false,
            vel_is_speed_of_sound: false,
        }
    }
}
