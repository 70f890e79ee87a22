//! Simulated limited-copy knapsack.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::ItemCatalog;
use crate::env::{KnapsackEnv, StepResult, Variant};
use crate::ItemId;

use super::config::SimConfig;

/// Limited-copy knapsack environment.
///
/// Behaves like [`UnboundedKnapsack`](super::UnboundedKnapsack) except that
/// each item carries an availability count, decremented on every acceptance.
/// Stepping with an exhausted item ends the run for no reward; the counts are
/// restored on reset.
#[derive(Debug)]
pub struct BoundedKnapsack {
    /// Environment configuration.
    pub config: SimConfig,
    /// Catalog as built, with pristine availability counts.
    template: ItemCatalog,
    /// Items on offer this episode, counts decremented as the run packs them.
    catalog: ItemCatalog,
    /// Weight currently packed.
    current_weight: u32,
    /// Random number generator.
    rng: StdRng,
    /// Seed for reproducible resets.
    seed: u64,
}

impl BoundedKnapsack {
    /// Creates an environment with a catalog sampled from `config`.
    pub fn generate(config: SimConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let template = config.sample_catalog(&mut rng, true);
        Self {
            config,
            catalog: template.clone(),
            template,
            current_weight: 0,
            rng,
            seed,
        }
    }

    /// Creates an environment around a hand-built catalog.
    ///
    /// # Panics
    ///
    /// Panics if `catalog` carries no availability limits.
    pub fn new(catalog: ItemCatalog, max_weight: u32) -> Self {
        assert!(
            catalog.is_bounded(),
            "Limited-copy environment requires a catalog with availability limits"
        );
        let config = SimConfig {
            max_weight,
            n_items: catalog.len(),
            ..SimConfig::default()
        };
        Self {
            config,
            catalog: catalog.clone(),
            template: catalog,
            current_weight: 0,
            rng: StdRng::seed_from_u64(0),
            seed: 0,
        }
    }
}

impl KnapsackEnv for BoundedKnapsack {
    type Action = ItemId;

    fn variant(&self) -> Variant {
        Variant::Bounded
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed += 1; // different seed each episode
        if self.config.randomize_on_reset {
            self.template = self.config.sample_catalog(&mut self.rng, true);
        }
        self.catalog = self.template.clone();
        self.current_weight = 0;
    }

    fn step(&mut self, action: ItemId) -> StepResult {
        if self.catalog.remaining(action) == Some(0) {
            return StepResult {
                reward: 0.0,
                done: true,
            };
        }
        let weight = self.catalog.weight(action);
        if weight <= self.residual_capacity() {
            self.current_weight += weight;
            self.catalog.consume(action);
            StepResult {
                reward: f64::from(self.catalog.value(action)),
                done: self.current_weight == self.config.max_weight,
            }
        } else {
            StepResult {
                reward: 0.0,
                done: true,
            }
        }
    }

    fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    fn max_weight(&self) -> u32 {
        self.config.max_weight
    }

    fn current_weight(&self) -> u32 {
        self.current_weight
    }
}
