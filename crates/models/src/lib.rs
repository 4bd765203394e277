//! Catalog of astrophysical model presets for radiative-transfer grids.
//!
//! A *model* couples a typed configuration record (grid geometry, physical
//! scaling parameters, collaborator selections) with pure evaluators of
//! position: relative densities, temperatures, velocity and magnetic fields,
//! and per-position dust properties. The surrounding tool selects a model by
//! name, optionally customizes it with extra parameters, and then queries it
//! once per grid cell while building the simulation grid.
//!
//! ```rust
//! use models::{catalog, Model};
//! use nalgebra::Vector3;
//!
//! let disk = catalog().create("pp_disk").unwrap();
//! let density = disk.gas_density(&Vector3::new(1e12, 0.0, 0.0));
//! assert!(density.total() > 0.0);
//! ```

pub mod catalog;
pub mod config;
pub mod density;
pub mod error;
pub mod model;
pub mod presets;

#[cfg(test)]
mod catalog_test;

pub use catalog::{catalog, ModelCatalog, ModelFactory};
pub use config::{
    ConversionFactors, CylindricalGrid, GasMass, GridType, ModelParameters, OctreeGrid,
    SphericalGrid,
};
pub use density::DensityTable;
pub use error::{CatalogError, ModelError};
pub use model::Model;
