//! Simulated online knapsack.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::ItemCatalog;
use crate::env::{Decision, KnapsackEnv, OnlineKnapsackEnv, StepResult, Variant};
use crate::ItemId;

use super::config::SimConfig;

/// Online knapsack environment.
///
/// One catalog item is on offer at a time; a step accepts or rejects it and a
/// fresh arrival replaces it. Accepting a fitting item earns its value, and
/// an exact fill ends the run. Accepting an item that does not fit ends the
/// run for no reward; rejecting costs nothing. The run also ends on its own
/// after [`step_limit`](SimConfig::step_limit) arrivals.
///
/// Arrivals are drawn uniformly from the catalog, or replayed from a script
/// passed to [`OnlineKnapsack::with_arrivals`]; a scripted environment offers
/// the same stream on every reset.
#[derive(Debug)]
pub struct OnlineKnapsack {
    /// Environment configuration.
    pub config: SimConfig,
    /// Items arrivals are drawn from.
    catalog: ItemCatalog,
    /// Weight currently packed.
    current_weight: u32,
    /// Item currently on offer.
    current_item: ItemId,
    /// Arrivals handled so far this episode.
    steps_taken: u32,
    /// Scripted arrival stream, replayed on every reset.
    arrivals: Option<Vec<ItemId>>,
    /// Random number generator.
    rng: StdRng,
    /// Seed for reproducible resets.
    seed: u64,
}

impl OnlineKnapsack {
    /// Creates an environment with a catalog sampled from `config`.
    ///
    /// # Panics
    ///
    /// Panics if `config.n_items` is zero; there must be items to offer.
    pub fn generate(config: SimConfig, seed: u64) -> Self {
        assert!(config.n_items > 0, "Online environment requires items to offer");
        let mut rng = StdRng::seed_from_u64(seed);
        let catalog = config.sample_catalog(&mut rng, false);
        Self {
            config,
            catalog,
            current_weight: 0,
            current_item: 0,
            steps_taken: 0,
            arrivals: None,
            rng,
            seed,
        }
    }

    /// Creates an environment around a hand-built catalog, with arrivals
    /// drawn uniformly at random.
    ///
    /// # Panics
    ///
    /// Panics if `catalog` is empty.
    pub fn new(catalog: ItemCatalog, config: SimConfig, seed: u64) -> Self {
        assert!(!catalog.is_empty(), "Online environment requires items to offer");
        Self {
            config,
            catalog,
            current_weight: 0,
            current_item: 0,
            steps_taken: 0,
            arrivals: None,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an environment that replays `arrivals` instead of drawing at
    /// random, so every reset offers the identical stream.
    ///
    /// # Panics
    ///
    /// Panics if `catalog` is empty or `arrivals` holds fewer than
    /// `config.step_limit` entries.
    pub fn with_arrivals(catalog: ItemCatalog, config: SimConfig, arrivals: Vec<ItemId>) -> Self {
        assert!(!catalog.is_empty(), "Online environment requires items to offer");
        assert!(
            arrivals.len() >= config.step_limit as usize,
            "Scripted arrivals must cover every step of the episode"
        );
        Self {
            config,
            catalog,
            current_weight: 0,
            current_item: 0,
            steps_taken: 0,
            arrivals: Some(arrivals),
            rng: StdRng::seed_from_u64(0),
            seed: 0,
        }
    }

    /// Next arrival: the next scripted entry, or a uniform draw.
    fn draw_arrival(&mut self) -> ItemId {
        match &self.arrivals {
            Some(script) => script
                .get(self.steps_taken as usize)
                .copied()
                .unwrap_or(self.current_item),
            None => self.rng.gen_range(0..self.catalog.len()),
        }
    }
}

impl KnapsackEnv for OnlineKnapsack {
    type Action = Decision;

    fn variant(&self) -> Variant {
        Variant::Online
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed += 1; // different seed each episode
        if self.config.randomize_on_reset {
            self.catalog = self.config.sample_catalog(&mut self.rng, false);
        }
        self.current_weight = 0;
        self.steps_taken = 0;
        self.current_item = self.draw_arrival();
    }

    fn step(&mut self, action: Decision) -> StepResult {
        let weight = self.catalog.weight(self.current_item);
        let mut reward = 0.0;
        let mut done = false;

        if action.is_accept() {
            if weight <= self.residual_capacity() {
                self.current_weight += weight;
                reward = f64::from(self.catalog.value(self.current_item));
                if self.current_weight == self.config.max_weight {
                    done = true;
                }
            } else {
                // Accepting a misfit forfeits the rest of the run.
                done = true;
            }
        }

        self.steps_taken += 1;
        if self.steps_taken >= self.config.step_limit {
            done = true;
        }
        self.current_item = self.draw_arrival();

        StepResult { reward, done }
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

impl OnlineKnapsackEnv for OnlineKnapsack {
    fn current_item(&self) -> ItemId {
        self.current_item
    }

    fn step_limit(&self) -> u32 {
        self.config.step_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted_env() -> OnlineKnapsack {
        let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
        let config = SimConfig {
            max_weight: 10,
            step_limit: 4,
            ..SimConfig::default()
        };
        OnlineKnapsack::with_arrivals(catalog, config, vec![0, 1, 0, 2])
    }

    #[test]
    fn accepting_fitting_arrival_earns_value() {
        let mut env = scripted_env();
        env.reset();
        assert_eq!(env.current_item(), 0);
        let outcome = env.step(Decision::Accept);
        assert_eq!(outcome.reward, 8.0);
        assert!(!outcome.done);
        assert_eq!(env.current_item(), 1);
    }

    #[test]
    fn rejecting_is_free() {
        let mut env = scripted_env();
        env.reset();
        let outcome = env.step(Decision::Reject);
        assert_eq!(outcome.reward, 0.0);
        assert!(!outcome.done);
        assert_eq!(env.current_weight(), 0);
    }

    #[test]
    fn accepting_misfit_ends_run() {
        let catalog = ItemCatalog::unbounded(vec![8, 5], vec![4, 9]);
        let config = SimConfig {
            max_weight: 10,
            step_limit: 4,
            ..SimConfig::default()
        };
        let mut env = OnlineKnapsack::with_arrivals(catalog, config, vec![0, 0, 1, 0]);
        env.reset();
        env.step(Decision::Accept); // weight 4
        env.step(Decision::Accept); // weight 8
        let outcome = env.step(Decision::Accept); // weight 9 > residual 2
        assert_eq!(outcome.reward, 0.0);
        assert!(outcome.done);
        assert_eq!(env.current_weight(), 8);
    }

    #[test]
    fn episode_ends_at_step_limit() {
        let mut env = scripted_env();
        env.reset();
        for _ in 0..3 {
            assert!(!env.step(Decision::Reject).done);
        }
        assert!(env.step(Decision::Reject).done);
    }

    #[test]
    fn exact_fill_ends_run() {
        let catalog = ItemCatalog::unbounded(vec![8, 3], vec![4, 2]);
        let config = SimConfig {
            max_weight: 10,
            step_limit: 6,
            ..SimConfig::default()
        };
        let mut env = OnlineKnapsack::with_arrivals(catalog, config, vec![0, 0, 1, 0, 0, 0]);
        env.reset();
        env.step(Decision::Accept); // weight 4
        env.step(Decision::Accept); // weight 8
        let outcome = env.step(Decision::Accept); // weight 10, exact fill
        assert_eq!(outcome.reward, 3.0);
        assert!(outcome.done);
    }

    #[test]
    fn scripted_stream_replays_on_reset() {
        let mut env = scripted_env();
        env.reset();
        let mut first = vec![env.current_item()];
        for _ in 0..3 {
            env.step(Decision::Reject);
            first.push(env.current_item());
        }
        env.reset();
        let mut second = vec![env.current_item()];
        for _ in 0..3 {
            env.step(Decision::Reject);
            second.push(env.current_item());
        }
        assert_eq!(first, second);
    }

    #[test]
    fn random_arrivals_are_deterministic_per_seed() {
        let config = SimConfig {
            n_items: 16,
            step_limit: 8,
            ..SimConfig::default()
        };
        let mut a = OnlineKnapsack::generate(config.clone(), 21);
        let mut b = OnlineKnapsack::generate(config, 21);
        a.reset();
        b.reset();
        for _ in 0..8 {
            assert_eq!(a.current_item(), b.current_item());
            a.step(Decision::Reject);
            b.step(Decision::Reject);
        }
    }
}
