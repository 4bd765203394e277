//! Ragged density tables returned by the model evaluators.

use serde::{Deserialize, Serialize};

/// Relative densities for every dust composition and sub-region of a model.
///
/// The outer dimension enumerates dust compositions, the inner dimension
/// sub-regions of the same composition that are normalized to separate total
/// masses. Single-component models use the 1×1 table built by [`scalar`].
/// Rows may have different lengths, but the shape must be identical for every
/// queried position of a given model so the grid builder can normalize each
/// entry against its [`GasMass`](crate::config::GasMass) counterpart.
///
/// [`scalar`]: DensityTable::scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityTable {
    rows: Vec<Vec<f64>>,
}

impl DensityTable {
    /// A 1×1 table holding one relative density.
    pub fn scalar(value: f64) -> Self {
        Self {
            rows: vec![vec![value]],
        }
    }

    /// The all-zero scalar table.
    pub fn zero() -> Self {
        Self::scalar(0.0)
    }

    /// A table from explicit composition rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// The composition rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of dust compositions (outer dimension).
    pub fn num_compositions(&self) -> usize {
        self.rows.len()
    }

    /// Row lengths, outer to inner, for shape comparisons.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Sum over all compositions and sub-regions.
    pub fn total(&self) -> f64 {
        self.rows.iter().flatten().sum()
    }

    /// True when every entry is exactly 0.
    pub fn is_zero(&self) -> bool {
        self.rows.iter().flatten().all(|&value| value == 0.0)
    }

    /// Entry at a composition/region index pair.
    pub fn value(&self, composition: usize, region: usize) -> Option<f64> {
        self.rows.get(composition)?.get(region).copied()
    }
}

impl From<f64> for DensityTable {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}
