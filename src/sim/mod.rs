//! Simulated knapsack environments.
//!
//! One environment per problem variant, each implementing
//! [`KnapsackEnv`](crate::env::KnapsackEnv) over a sampled or hand-built
//! [`ItemCatalog`](crate::ItemCatalog). All three share [`SimConfig`] and the
//! same reset discipline: every reset reseeds the episode generator from a
//! stored seed and bumps it, so a run is reproducible from the construction
//! seed while successive episodes differ.

pub mod bounded;
pub mod config;
pub mod online;
pub mod unbounded;

pub use bounded::BoundedKnapsack;
pub use config::SimConfig;
pub use online::OnlineKnapsack;
pub use unbounded::UnboundedKnapsack;
