//! Simulated unlimited-copy knapsack.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::ItemCatalog;
use crate::env::{KnapsackEnv, StepResult, Variant};
use crate::ItemId;

use super::config::SimConfig;

/// Unlimited-copy knapsack environment.
///
/// Every catalog item may be packed as often as it fits. A step with a
/// fitting item earns its value; filling the knapsack exactly ends the run,
/// and so does stepping with an item that does not fit, for no reward.
///
/// # Lifecycle
///
/// 1. Build with [`UnboundedKnapsack::generate`] or [`UnboundedKnapsack::new`].
/// 2. Call [`reset`](KnapsackEnv::reset) to start an episode.
/// 3. Repeatedly call [`step`](KnapsackEnv::step) until `done`.
#[derive(Debug)]
pub struct UnboundedKnapsack {
    /// Environment configuration.
    pub config: SimConfig,
    /// Items on offer.
    catalog: ItemCatalog,
    /// Weight currently packed.
    current_weight: u32,
    /// Random number generator.
    rng: StdRng,
    /// Seed for reproducible resets.
    seed: u64,
}

impl UnboundedKnapsack {
    /// Creates an environment with a catalog sampled from `config`.
    pub fn generate(config: SimConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let catalog = config.sample_catalog(&mut rng, false);
        Self {
            config,
            catalog,
            current_weight: 0,
            rng,
            seed,
        }
    }

    /// Creates an environment around a hand-built catalog.
    pub fn new(catalog: ItemCatalog, max_weight: u32) -> Self {
        let config = SimConfig {
            max_weight,
            n_items: catalog.len(),
            ..SimConfig::default()
        };
        Self {
            config,
            catalog,
            current_weight: 0,
            rng: StdRng::seed_from_u64(0),
            seed: 0,
        }
    }
}

impl KnapsackEnv for UnboundedKnapsack {
    type Action = ItemId;

    fn variant(&self) -> Variant {
        Variant::Unbounded
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed += 1; // different seed each episode
        if self.config.randomize_on_reset {
            self.catalog = self.config.sample_catalog(&mut self.rng, false);
        }
        self.current_weight = 0;
    }

    fn step(&mut self, action: ItemId) -> StepResult {
        let weight = self.catalog.weight(action);
        if weight <= self.residual_capacity() {
            self.current_weight += weight;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn small_env() -> UnboundedKnapsack {
        let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
        UnboundedKnapsack::new(catalog, 10)
    }

    #[test]
    fn fitting_step_earns_value() {
        let mut env = small_env();
        env.reset();
        let outcome = env.step(0);
        assert_eq!(outcome.reward, 8.0);
        assert!(!outcome.done);
        assert_eq!(env.current_weight(), 4);
        assert_eq!(env.residual_capacity(), 6);
    }

    #[test]
    fn exact_fill_ends_run() {
        let mut env = small_env();
        env.reset();
        env.step(0); // weight 4
        env.step(0); // weight 8
        let outcome = env.step(2); // weight 10, exact fill
        assert_eq!(outcome.reward, 3.0);
        assert!(outcome.done);
    }

    #[test]
    fn misfit_step_ends_run_without_reward() {
        let mut env = small_env();
        env.reset();
        env.step(0);
        env.step(0);
        let outcome = env.step(1); // weight 5 > residual 2
        assert_eq!(outcome.reward, 0.0);
        assert!(outcome.done);
        assert_eq!(env.current_weight(), 8);
    }

    #[test]
    fn reset_clears_load() {
        let mut env = small_env();
        env.reset();
        env.step(0);
        env.reset();
        assert_eq!(env.current_weight(), 0);
    }

    #[test]
    fn generated_catalog_is_deterministic_per_seed() {
        let a = UnboundedKnapsack::generate(SimConfig::default(), 42);
        let b = UnboundedKnapsack::generate(SimConfig::default(), 42);
        assert_eq!(a.catalog(), b.catalog());
    }

    #[test]
    fn randomizing_reset_resamples_catalog() {
        let config = SimConfig {
            randomize_on_reset: true,
            n_items: 32,
            ..SimConfig::default()
        };
        let mut env = UnboundedKnapsack::generate(config, 9);
        env.reset();
        let first = env.catalog().clone();
        env.reset();
        assert_ne!(env.catalog(), &first);
    }
}
