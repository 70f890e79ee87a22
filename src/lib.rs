//! knapkit - Greedy decision policies for stepwise knapsack environments.
//!
//! Three knapsack variants, one narrow environment interface, and a greedy
//! policy for each: rank-and-pack loops for the unlimited- and limited-copy
//! problems, and a coin-flip dual-strategy policy for the online problem.
//! Policies drive any [`KnapsackEnv`] through reset/step calls and return the
//! full trace of the run; simulation-backed environments live in [`sim`].

pub mod catalog;
pub mod env;
pub mod error;
pub mod heuristics;
pub mod metrics;
pub mod sim;
pub mod trace;

pub use catalog::ItemCatalog;
pub use env::{Decision, KnapsackEnv, OnlineKnapsackEnv, StepResult, Variant};
pub use error::PolicyError;
pub use heuristics::{greedy_bounded, greedy_unbounded, DensityRanking, Strategy, TwoBins};
pub use metrics::EvalSummary;
pub use trace::{OnlineTrace, RunTrace};

/// Identifier of an item: its index in catalog order.
pub type ItemId = usize;
