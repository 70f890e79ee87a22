//! Decision traces returned by the policies.
//!
//! A trace is the full audit record of one run: every action taken in order,
//! paired with the reward the environment granted for it. Traces are plain
//! data; summarizing across runs lives in [`crate::metrics`].

use crate::heuristics::Strategy;
use crate::{Decision, ItemId};

/// Record of one offline greedy run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunTrace {
    /// Items packed, in selection order.
    pub actions: Vec<ItemId>,
    /// Reward granted for each action, index-aligned with `actions`.
    pub rewards: Vec<f64>,
}

impl RunTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one step.
    pub fn push(&mut self, action: ItemId, reward: f64) {
        self.actions.push(action);
        self.rewards.push(reward);
    }

    /// Number of steps recorded.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Sum of all rewards; the total value packed.
    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }
}

/// Record of one online run.
///
/// Online runs log the arrival stream alongside the verdicts, so a trace can
/// be replayed or audited without the environment that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnlineTrace {
    /// Strategy the policy committed to for the whole run.
    pub strategy: Strategy,
    /// Item offered at each step, in arrival order.
    pub offered: Vec<ItemId>,
    /// Verdict on each offered item, index-aligned with `offered`.
    pub decisions: Vec<Decision>,
    /// Reward granted for each verdict, index-aligned with `offered`.
    pub rewards: Vec<f64>,
}

impl OnlineTrace {
    /// Creates an empty trace for a run driven by `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            offered: Vec::new(),
            decisions: Vec::new(),
            rewards: Vec::new(),
        }
    }

    /// Appends one step.
    pub fn push(&mut self, offered: ItemId, decision: Decision, reward: f64) {
        self.offered.push(offered);
        self.decisions.push(decision);
        self.rewards.push(reward);
    }

    /// Number of arrivals handled.
    pub fn len(&self) -> usize {
        self.offered.len()
    }

    /// Returns true if no arrivals were handled.
    pub fn is_empty(&self) -> bool {
        self.offered.is_empty()
    }

    /// Sum of all rewards; the total value packed.
    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    /// Number of arrivals that were accepted.
    pub fn accepted_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.is_accept()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_trace_accumulates() {
        let mut trace = RunTrace::new();
        assert!(trace.is_empty());
        trace.push(0, 8.0);
        trace.push(2, 3.0);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.actions, vec![0, 2]);
        assert_eq!(trace.total_reward(), 11.0);
    }

    #[test]
    fn online_trace_counts_accepts() {
        let mut trace = OnlineTrace::new(Strategy::Greedy);
        trace.push(3, Decision::Accept, 7.0);
        trace.push(1, Decision::Reject, 0.0);
        trace.push(3, Decision::Accept, 7.0);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.accepted_count(), 2);
        assert_eq!(trace.total_reward(), 14.0);
        assert_eq!(trace.strategy, Strategy::Greedy);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn run_trace_roundtrip() {
            let mut trace = RunTrace::new();
            trace.push(0, 8.0);
            trace.push(2, 3.0);
            let json = serde_json::to_string(&trace).unwrap();
            let restored: RunTrace = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, trace);
        }

        #[test]
        fn online_trace_roundtrip() {
            let mut trace = OnlineTrace::new(Strategy::RejectionThreshold);
            trace.push(1, Decision::Reject, 0.0);
            trace.push(0, Decision::Accept, 8.0);
            let json = serde_json::to_string(&trace).unwrap();
            let restored: OnlineTrace = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, trace);
            assert!(json.contains("rejection_threshold"));
        }
    }
}
