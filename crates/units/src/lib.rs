pub mod length;
pub mod magnetic_field;
pub mod mass;
pub mod temperature;

#[cfg(test)]
mod mass_test;

pub use length::{Length, AU_TO_M, PC_TO_M};
pub use magnetic_field::{MagneticField, GAUSS_TO_TESLA};
pub use mass::{Mass, SOLAR_MASS_KG};
pub use temperature::Temperature;
