//! Greedy decision policies for the knapsack variants.
//!
//! Three entry points cover the three problem variants:
//!
//! - [`greedy_unbounded`]: packs the best value/weight item that still fits,
//!   as often as it fits, against an unlimited-copy environment.
//! - [`greedy_bounded`]: the same walk with per-item availability counts
//!   respected.
//! - [`TwoBins`]: an online policy that commits to one of two strategies by
//!   coin flip and holds it for the whole run.
//!
//! All three drive a [`KnapsackEnv`] through its stepwise surface and return
//! a trace of the run.

pub mod offline;
pub mod online;
pub mod ranking;


pub use offline::{greedy_bounded, greedy_unbounded};
pub use online::{Strategy, TwoBins};
pub use ranking::DensityRanking;

use crate::env::{KnapsackEnv, Variant};
use crate::error::PolicyError;

/// Confirms the environment poses the variant a policy targets.
pub(crate) fn check_variant<E: KnapsackEnv>(env: &E, expected: Variant) -> Result<(), PolicyError> {
    let found = env.variant();
    if found == expected {
        Ok(())
    } else {
        Err(PolicyError::VariantMismatch { expected, found })
    }
}
