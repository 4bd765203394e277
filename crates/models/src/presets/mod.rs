//! Built-in model presets.
//!
//! Every preset owns one [`ModelParameters`](crate::config::ModelParameters)
//! record built in its constructor and implements
//! [`Model`](crate::model::Model), overriding the evaluators that differ from
//! the defaults. Registry names are listed in
//! [`ModelCatalog::with_builtin`](crate::catalog::ModelCatalog::with_builtin).

mod cube;
mod custom;
mod filament;
mod galaxy;
mod gg_tau;
mod hd97048;
mod mhd;
mod multi_disk;
mod pp_disk;
mod test_grid;

#[cfg(test)]
mod gg_tau_test;
#[cfg(test)]
mod test_grid_test;

pub use cube::Cube;
pub use custom::CustomModel;
pub use filament::Filament;
pub use galaxy::Galaxy;
pub use gg_tau::{GGTauCircumstellarDisk, GGTauDisk};
pub use hd97048::Hd97048;
pub use mhd::{MhdBastian, MhdFlock};
pub use multi_disk::MultiDisk;
pub use pp_disk::ProtoplanetaryDisk;
pub use test_grid::TestGrid;
