//! Dual-strategy policy for the online variant.

use rand::Rng;
use tracing::{debug, trace};

use crate::env::{Decision, OnlineKnapsackEnv, Variant};
use crate::error::PolicyError;
use crate::trace::OnlineTrace;
use crate::ItemId;

use super::check_variant;

/// Strategy an online run commits to before the first arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Accept every arrival that fits the residual capacity.
    Greedy,
    /// Reject arrivals while tallying their weight; once the tally exceeds
    /// the knapsack capacity, accept everything from then on.
    RejectionThreshold,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::RejectionThreshold => write!(f, "rejection-threshold"),
        }
    }
}

/// Online knapsack policy that flips a coin between two strategies.
///
/// Adapted from the two-bins scheme of Han, Kawase and Makino (2015): before
/// the first arrival the policy commits, by fair coin flip, to either the
/// greedy strategy or the rejection-threshold strategy, and holds that choice
/// for the whole run. Randomizing over the two buys a competitive-ratio
/// guarantee neither strategy has on its own.
///
/// The flip consumes the caller's random source, so a seeded generator makes
/// the choice reproducible:
///
/// ```
/// use knapkit::heuristics::TwoBins;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let policy = TwoBins::from_rng(&mut rng);
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(TwoBins::from_rng(&mut rng).strategy(), policy.strategy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoBins {
    strategy: Strategy,
}

impl TwoBins {
    /// Commits to a strategy by fair coin flip on `rng`.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let strategy = if rng.gen_bool(0.5) {
            Strategy::Greedy
        } else {
            Strategy::RejectionThreshold
        };
        debug!(%strategy, "coin flip committed online strategy");
        Self { strategy }
    }

    /// Commits to `strategy` directly, bypassing the coin flip.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The strategy this policy committed to.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Drives one full run against `env`, deciding every arrival until the
    /// environment reports the run over.
    ///
    /// With `scenario` set, the policy judges the scenario's items instead of
    /// the environment's own arrival field, one per step in order. The
    /// environment still scores its own arrival, so rewards line up with the
    /// decisions only when the environment is scripted to the same stream
    /// (see [`OnlineKnapsack::with_arrivals`]). A scenario must supply at
    /// least [`step_limit`] items, and at least one, so it cannot run out
    /// mid-run; every entry must name a catalog item.
    ///
    /// [`OnlineKnapsack::with_arrivals`]: crate::sim::OnlineKnapsack::with_arrivals
    /// [`step_limit`]: OnlineKnapsackEnv::step_limit
    ///
    /// # Returns
    ///
    /// The trace of the run. Fails with [`PolicyError::VariantMismatch`] if
    /// `env` poses a different problem variant,
    /// [`PolicyError::ScenarioTooShort`] if `scenario` cannot cover every
    /// step, or [`PolicyError::ScenarioItemUnknown`] if it names an item the
    /// catalog does not hold.
    pub fn run<E>(&self, env: &mut E, scenario: Option<&[ItemId]>) -> Result<OnlineTrace, PolicyError>
    where
        E: OnlineKnapsackEnv,
    {
        check_variant(env, Variant::Online)?;
        if let Some(items) = scenario {
            // The loop judges at least one arrival even when the step limit
            // is zero, so an empty scenario can never cover the run.
            let needed = (env.step_limit() as usize).max(1);
            if items.len() < needed {
                return Err(PolicyError::ScenarioTooShort {
                    len: items.len(),
                    step_limit: env.step_limit(),
                });
            }
            let n_items = env.catalog().len();
            if let Some(&item) = items.iter().find(|&&item| item >= n_items) {
                return Err(PolicyError::ScenarioItemUnknown { item, n_items });
            }
        }
        env.reset();

        let mut run = OnlineTrace::new(self.strategy);
        let mut rejected_weight: u64 = 0;
        let threshold = u64::from(env.max_weight());

        loop {
            let offered = match scenario {
                Some(items) => items[run.len()],
                None => env.current_item(),
            };
            let weight = env.catalog().weight(offered);

            let decision = match self.strategy {
                Strategy::Greedy => {
                    if weight <= env.residual_capacity() {
                        Decision::Accept
                    } else {
                        Decision::Reject
                    }
                }
                Strategy::RejectionThreshold => {
                    // Every arrival counts toward the tally, and the tally
                    // never resets: once crossed, the threshold stays crossed.
                    let before = rejected_weight;
                    rejected_weight += u64::from(weight);
                    if rejected_weight > threshold {
                        if before <= threshold {
                            trace!(rejected_weight, threshold, "rejection threshold crossed");
                        }
                        Decision::Accept
                    } else {
                        Decision::Reject
                    }
                }
            };

            let outcome = env.step(decision);
            run.push(offered, decision, outcome.reward);
            if outcome.done {
                break;
            }
        }

        debug!(
            strategy = %self.strategy,
            arrivals = run.len(),
            accepted = run.accepted_count(),
            total_reward = run.total_reward(),
            "online run finished"
        );
        Ok(run)
    }
}
