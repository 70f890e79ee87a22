//! Environment interface the decision policies run against.
//!
//! Policies never manipulate knapsack state directly. They drive an
//! implementation of [`KnapsackEnv`] through a narrow gym-style surface:
//! [`reset`](KnapsackEnv::reset) to rewind to the initial state, then repeated
//! [`step`](KnapsackEnv::step) calls, each returning the reward earned and
//! whether the run is over. Read access to the catalog and to the load state
//! is enough for the policies to make every choice.
//!
//! The crate ships simulation-backed implementations in [`crate::sim`]; any
//! other backing (a replayed log, a hardware twin) plugs in by implementing
//! the same trait.

use std::fmt;

use crate::{ItemCatalog, ItemId};

/// Which knapsack problem an environment poses.
///
/// Policies check this before running so that, for example, the
/// limited-copy loop is never driven against an environment that does not
/// track availability counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// Every item may be selected arbitrarily often.
    Unbounded,
    /// Each item carries a finite availability count.
    Bounded,
    /// Items arrive one at a time and must be accepted or rejected on sight.
    Online,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Unbounded => "unbounded knapsack",
            Variant::Bounded => "bounded knapsack",
            Variant::Online => "online knapsack",
        };
        write!(f, "{name}")
    }
}

/// Verdict on the currently offered item in the online variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Decision {
    /// Let the offered item pass.
    Reject,
    /// Place the offered item in the knapsack.
    Accept,
}

impl Decision {
    /// Returns true for [`Decision::Accept`].
    pub fn is_accept(self) -> bool {
        matches!(self, Decision::Accept)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Reject => write!(f, "reject"),
            Decision::Accept => write!(f, "accept"),
        }
    }
}

/// Outcome of a single environment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// Reward earned by the step; the accepted item's value, or zero.
    pub reward: f64,
    /// True once the run is over and further steps are meaningless.
    pub done: bool,
}

/// Stepwise knapsack environment.
///
/// The action type varies by variant: offline environments are stepped with
/// the [`ItemId`] to pack next, the online environment with a [`Decision`]
/// about the item currently on offer.
pub trait KnapsackEnv {
    /// What a [`step`](Self::step) call carries.
    type Action: Copy + fmt::Debug;

    /// The problem variant this environment poses.
    fn variant(&self) -> Variant;

    /// Rewinds the environment to its initial state.
    ///
    /// Implementations that generate state randomly must make runs after a
    /// reset reproducible for a given construction seed.
    fn reset(&mut self);

    /// Applies one action and reports its outcome.
    ///
    /// Calling `step` after a step reported `done` is a caller bug;
    /// implementations may panic.
    fn step(&mut self, action: Self::Action) -> StepResult;

    /// The item catalog, including any per-item availability counts.
    fn catalog(&self) -> &ItemCatalog;

    /// Total weight the knapsack can hold.
    fn max_weight(&self) -> u32;

    /// Weight currently packed.
    fn current_weight(&self) -> u32;

    /// Weight still available before the knapsack is full.
    fn residual_capacity(&self) -> u32 {
        self.max_weight().saturating_sub(self.current_weight())
    }
}

/// Additional surface of the online variant.
pub trait OnlineKnapsackEnv: KnapsackEnv<Action = Decision> {
    /// The item currently on offer.
    fn current_item(&self) -> ItemId;

    /// Number of arrivals after which the run ends on its own.
    fn step_limit(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_display() {
        assert_eq!(Variant::Unbounded.to_string(), "unbounded knapsack");
        assert_eq!(Variant::Bounded.to_string(), "bounded knapsack");
        assert_eq!(Variant::Online.to_string(), "online knapsack");
    }

    #[test]
    fn decision_accept_flag() {
        assert!(Decision::Accept.is_accept());
        assert!(!Decision::Reject.is_accept());
        assert_eq!(Decision::Accept.to_string(), "accept");
        assert_eq!(Decision::Reject.to_string(), "reject");
    }
}
