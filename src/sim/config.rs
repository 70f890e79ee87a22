//! Configuration for the simulated environments.

use rand::Rng;

use crate::catalog::ItemCatalog;

/// Parameters shared by the simulated knapsack environments.
///
/// The defaults reproduce the standard benchmark instance: 200 items, a
/// capacity of 200, values and weights drawn uniformly from 1..=99,
/// availability counts from 1..=9, and a 50-arrival online episode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of items sampled into a generated catalog.
    pub n_items: usize,
    /// Total weight the knapsack can hold.
    pub max_weight: u32,
    /// Inclusive range item values are drawn from.
    pub value_range: (u32, u32),
    /// Inclusive range item weights are drawn from.
    pub weight_range: (u32, u32),
    /// Inclusive range availability counts are drawn from (limited-copy only).
    pub limit_range: (u32, u32),
    /// Arrivals after which an online episode ends on its own.
    pub step_limit: u32,
    /// Resample the catalog on every reset instead of keeping the one the
    /// environment was built with.
    pub randomize_on_reset: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_items: 200,
            max_weight: 200,
            value_range: (1, 99),
            weight_range: (1, 99),
            limit_range: (1, 9),
            step_limit: 50,
            randomize_on_reset: false,
        }
    }
}

impl SimConfig {
    /// Samples a catalog of `n_items` items from the configured ranges.
    ///
    /// # Panics
    ///
    /// Panics if `weight_range` starts at zero; catalog weights must be
    /// positive.
    pub fn sample_catalog<R: Rng>(&self, rng: &mut R, with_limits: bool) -> ItemCatalog {
        let values = (0..self.n_items)
            .map(|_| rng.gen_range(self.value_range.0..=self.value_range.1))
            .collect();
        let weights = (0..self.n_items)
            .map(|_| rng.gen_range(self.weight_range.0..=self.weight_range.1))
            .collect();
        if with_limits {
            let limits = (0..self.n_items)
                .map(|_| rng.gen_range(self.limit_range.0..=self.limit_range.1))
                .collect();
            ItemCatalog::bounded(values, weights, limits)
        } else {
            ItemCatalog::unbounded(values, weights)
        }
    }
}
