// Demonstration: run the offline greedy policies against simulated knapsacks.
//
// Build/run from this repo root:
//   cargo run --example offline_demo -- --variant bounded --items 200 --seed 42

use std::env;

use knapkit::heuristics::{greedy_bounded, greedy_unbounded};
use knapkit::sim::{BoundedKnapsack, SimConfig, UnboundedKnapsack};
use knapkit::{KnapsackEnv, RunTrace};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let variant = arg_value(&args, "--variant").unwrap_or("unbounded");
    let items: usize = arg_value(&args, "--items")
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = SimConfig {
        n_items: items,
        ..SimConfig::default()
    };

    let (trace, packed, capacity) = match variant {
        "unbounded" => {
            let mut env = UnboundedKnapsack::generate(config, seed);
            let trace = greedy_unbounded(&mut env).unwrap();
            (trace, env.current_weight(), env.max_weight())
        }
        "bounded" => {
            let mut env = BoundedKnapsack::generate(config, seed);
            let trace = greedy_bounded(&mut env).unwrap();
            (trace, env.current_weight(), env.max_weight())
        }
        other => {
            eprintln!("Unknown --variant '{}'; expected 'unbounded' or 'bounded'.", other);
            std::process::exit(2);
        }
    };

    report(variant, &trace, packed, capacity);
}

fn report(variant: &str, trace: &RunTrace, packed: u32, capacity: u32) {
    println!("Variant:        {}", variant);
    println!("Items packed:   {}", trace.len());
    println!("Total reward:   {:.0}", trace.total_reward());
    println!("Weight used:    {} / {}", packed, capacity);
    let preview: Vec<_> = trace.actions.iter().take(10).collect();
    println!("First picks:    {:?}", preview);
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
