//! Offline greedy policies for the unlimited- and limited-copy variants.

use tracing::{debug, trace};

use crate::env::{KnapsackEnv, Variant};
use crate::error::PolicyError;
use crate::trace::RunTrace;
use crate::ItemId;

use super::{check_variant, DensityRanking};

/// Greedy policy for the unlimited-copy variant.
///
/// Ranks items once by descending value/weight ratio, then repeatedly packs
/// the best-ranked item that still fits. An item that no longer fits is
/// dropped from contention permanently; capacity only shrinks, so it can
/// never fit again. The walk ends when the environment reports the run over
/// or every item has been dropped.
///
/// The environment is reset before the walk, so the returned trace always
/// describes a run from the initial state.
///
/// # Returns
///
/// The trace of the run, or [`PolicyError::VariantMismatch`] if `env` poses a
/// different problem variant.
///
/// # Examples
///
/// ```
/// use knapkit::heuristics::greedy_unbounded;
/// use knapkit::sim::UnboundedKnapsack;
/// use knapkit::ItemCatalog;
///
/// let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
/// let mut env = UnboundedKnapsack::new(catalog, 10);
///
/// let trace = greedy_unbounded(&mut env)?;
/// assert_eq!(trace.actions, vec![0, 0, 2]);
/// assert_eq!(trace.total_reward(), 19.0);
/// # Ok::<(), knapkit::PolicyError>(())
/// ```
pub fn greedy_unbounded<E>(env: &mut E) -> Result<RunTrace, PolicyError>
where
    E: KnapsackEnv<Action = ItemId>,
{
    check_variant(env, Variant::Unbounded)?;
    env.reset();

    let mut ranking = DensityRanking::new(env.catalog());
    let mut run = RunTrace::new();

    while let Some(item) = ranking.head() {
        if env.catalog().weight(item) > env.residual_capacity() {
            trace!(item, "item no longer fits, dropping from contention");
            ranking.drop_head();
            continue;
        }
        let outcome = env.step(item);
        run.push(item, outcome.reward);
        if outcome.done {
            break;
        }
    }

    debug!(
        steps = run.len(),
        total_reward = run.total_reward(),
        "unbounded greedy run finished"
    );
    Ok(run)
}

/// Greedy policy for the limited-copy variant.
///
/// Same walk as [`greedy_unbounded`], with one extra pruning rule checked
/// first: an item whose availability count has reached zero is dropped from
/// contention before any fit test, so the environment is never stepped with
/// an exhausted item.
///
/// # Returns
///
/// The trace of the run, or [`PolicyError::VariantMismatch`] if `env` poses a
/// different problem variant.
pub fn greedy_bounded<E>(env: &mut E) -> Result<RunTrace, PolicyError>
where
    E: KnapsackEnv<Action = ItemId>,
{
    check_variant(env, Variant::Bounded)?;
    env.reset();

    let mut ranking = DensityRanking::new(env.catalog());
    let mut run = RunTrace::new();

    while let Some(item) = ranking.head() {
        if env.catalog().remaining(item) == Some(0) {
            trace!(item, "item exhausted, dropping from contention");
            ranking.drop_head();
            continue;
        }
        if env.catalog().weight(item) > env.residual_capacity() {
            trace!(item, "item no longer fits, dropping from contention");
            ranking.drop_head();
            continue;
        }
        let outcome = env.step(item);
        run.push(item, outcome.reward);
        if outcome.done {
            break;
        }
    }

    debug!(
        steps = run.len(),
        total_reward = run.total_reward(),
        "bounded greedy run finished"
    );
    Ok(run)
}
