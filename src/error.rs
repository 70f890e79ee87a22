use thiserror::Error;

use crate::env::Variant;
use crate::ItemId;

/// Errors surfaced by the policy entry points.
///
/// Every variant is a caller-input or caller-configuration problem and is
/// returned before the policy touches the environment; there is nothing to
/// retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The environment declares a different problem variant than the policy
    /// was written for. The caller picked the wrong entry point.
    #[error("{found} environment received; this policy targets {expected}")]
    VariantMismatch { expected: Variant, found: Variant },

    /// A supplied scenario cannot cover every step of the run.
    #[error("scenario supplies {len} arrivals but the step limit is {step_limit}")]
    ScenarioTooShort { len: usize, step_limit: u32 },

    /// A supplied scenario names an item the catalog does not hold.
    #[error("scenario offers item {item} but the catalog holds {n_items} items")]
    ScenarioItemUnknown { item: ItemId, n_items: usize },
}
