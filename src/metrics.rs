//! Aggregated statistics over repeated policy runs.

use std::fmt;

use rand::Rng;

use crate::env::{KnapsackEnv, OnlineKnapsackEnv};
use crate::error::PolicyError;
use crate::heuristics::{greedy_bounded, greedy_unbounded, TwoBins};
use crate::trace::{OnlineTrace, RunTrace};
use crate::ItemId;

/// Mean performance over a batch of runs.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalSummary {
    /// Mean total reward per run.
    pub mean_total_reward: f64,
    /// Mean number of environment steps per run.
    pub mean_steps: f64,
    /// Mean number of items packed per run.
    pub mean_accepted: f64,
    /// Number of runs aggregated.
    pub n_runs: usize,
}

impl EvalSummary {
    /// Aggregates offline traces. Every offline action packs an item, so the
    /// accepted count equals the step count.
    pub fn from_offline(traces: &[RunTrace]) -> Self {
        let n = traces.len();
        if n == 0 {
            return Self::empty();
        }
        let denom = n as f64;
        Self {
            mean_total_reward: traces.iter().map(RunTrace::total_reward).sum::<f64>() / denom,
            mean_steps: traces.iter().map(|t| t.len() as f64).sum::<f64>() / denom,
            mean_accepted: traces.iter().map(|t| t.len() as f64).sum::<f64>() / denom,
            n_runs: n,
        }
    }

    /// Aggregates online traces.
    pub fn from_online(traces: &[OnlineTrace]) -> Self {
        let n = traces.len();
        if n == 0 {
            return Self::empty();
        }
        let denom = n as f64;
        Self {
            mean_total_reward: traces.iter().map(OnlineTrace::total_reward).sum::<f64>() / denom,
            mean_steps: traces.iter().map(|t| t.len() as f64).sum::<f64>() / denom,
            mean_accepted: traces
                .iter()
                .map(|t| t.accepted_count() as f64)
                .sum::<f64>()
                / denom,
            n_runs: n,
        }
    }

    /// Runs the unlimited-copy greedy policy `n_runs` times and aggregates.
    pub fn evaluate_unbounded<E>(env: &mut E, n_runs: usize) -> Result<Self, PolicyError>
    where
        E: KnapsackEnv<Action = ItemId>,
    {
        let mut traces = Vec::with_capacity(n_runs);
        for _ in 0..n_runs {
            traces.push(greedy_unbounded(env)?);
        }
        Ok(Self::from_offline(&traces))
    }

    /// Runs the limited-copy greedy policy `n_runs` times and aggregates.
    pub fn evaluate_bounded<E>(env: &mut E, n_runs: usize) -> Result<Self, PolicyError>
    where
        E: KnapsackEnv<Action = ItemId>,
    {
        let mut traces = Vec::with_capacity(n_runs);
        for _ in 0..n_runs {
            traces.push(greedy_bounded(env)?);
        }
        Ok(Self::from_offline(&traces))
    }

    /// Runs the online policy `n_runs` times and aggregates, flipping a fresh
    /// coin for each run so both strategies contribute to the mean.
    pub fn evaluate_online<E, R>(env: &mut E, rng: &mut R, n_runs: usize) -> Result<Self, PolicyError>
    where
        E: OnlineKnapsackEnv,
        R: Rng,
    {
        let mut traces = Vec::with_capacity(n_runs);
        for _ in 0..n_runs {
            let policy = TwoBins::from_rng(rng);
            traces.push(policy.run(env, None)?);
        }
        Ok(Self::from_online(&traces))
    }

    fn empty() -> Self {
        Self {
            mean_total_reward: 0.0,
            mean_steps: 0.0,
            mean_accepted: 0.0,
            n_runs: 0,
        }
    }
}

impl fmt::Display for EvalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Evaluation Summary ({} runs) ===", self.n_runs)?;
        writeln!(f, "  Mean total reward:  {:.2}", self.mean_total_reward)?;
        writeln!(f, "  Mean steps:         {:.1}", self.mean_steps)?;
        writeln!(f, "  Mean items packed:  {:.1}", self.mean_accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCatalog;
    use crate::sim::{BoundedKnapsack, OnlineKnapsack, SimConfig, UnboundedKnapsack};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn offline_aggregation() {
        let mut a = RunTrace::new();
        a.push(0, 8.0);
        a.push(2, 3.0);
        let mut b = RunTrace::new();
        b.push(1, 5.0);
        let summary = EvalSummary::from_offline(&[a, b]);
        assert_eq!(summary.n_runs, 2);
        assert_eq!(summary.mean_total_reward, 8.0);
        assert_eq!(summary.mean_steps, 1.5);
        assert_eq!(summary.mean_accepted, 1.5);
    }

    #[test]
    fn empty_batch_yields_zeros() {
        let summary = EvalSummary::from_offline(&[]);
        assert_eq!(summary.n_runs, 0);
        assert_eq!(summary.mean_total_reward, 0.0);
    }

    #[test]
    fn evaluate_unbounded_completes() {
        let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
        let mut env = UnboundedKnapsack::new(catalog, 10);
        let summary = EvalSummary::evaluate_unbounded(&mut env, 3).unwrap();
        assert_eq!(summary.n_runs, 3);
        assert_eq!(summary.mean_total_reward, 19.0);
    }

    #[test]
    fn evaluate_bounded_completes() {
        let catalog = ItemCatalog::bounded(vec![8, 5, 3], vec![4, 5, 2], vec![1, 1, 1]);
        let mut env = BoundedKnapsack::new(catalog, 10);
        let summary = EvalSummary::evaluate_bounded(&mut env, 2).unwrap();
        assert_eq!(summary.n_runs, 2);
        assert_eq!(summary.mean_total_reward, 11.0);
    }

    #[test]
    fn evaluate_online_completes() {
        let config = SimConfig {
            n_items: 16,
            step_limit: 10,
            ..SimConfig::default()
        };
        let mut env = OnlineKnapsack::generate(config, 5);
        let mut rng = StdRng::seed_from_u64(5);
        let summary = EvalSummary::evaluate_online(&mut env, &mut rng, 4).unwrap();
        assert_eq!(summary.n_runs, 4);
        assert!(summary.mean_steps > 0.0);
    }

    #[test]
    fn display_lists_all_lines() {
        let summary = EvalSummary::from_offline(&[]);
        let text = summary.to_string();
        assert!(text.contains("Evaluation Summary"));
        assert!(text.contains("Mean total reward"));
    }
}
