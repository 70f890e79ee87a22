// Demonstration: evaluate the coin-flip online policy over many episodes.
//
// Build/run from this repo root:
//   cargo run --example online_demo -- --episodes 100 --seed 7
//   cargo run --example online_demo -- --strategy threshold --episodes 100

use std::env;

use knapkit::heuristics::{Strategy, TwoBins};
use knapkit::sim::{OnlineKnapsack, SimConfig};
use knapkit::EvalSummary;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let strategy_name = arg_value(&args, "--strategy").unwrap_or("coin");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut env = OnlineKnapsack::generate(SimConfig::default(), seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let summary = match strategy_name {
        "coin" => EvalSummary::evaluate_online(&mut env, &mut rng, episodes).unwrap(),
        "greedy" => fixed_strategy(&mut env, Strategy::Greedy, episodes),
        "threshold" => fixed_strategy(&mut env, Strategy::RejectionThreshold, episodes),
        other => {
            eprintln!(
                "Unknown --strategy '{}'; expected 'coin', 'greedy', or 'threshold'.",
                other
            );
            std::process::exit(2);
        }
    };

    println!("Strategy: {}", strategy_name);
    println!("{}", summary);
}

fn fixed_strategy(env: &mut OnlineKnapsack, strategy: Strategy, episodes: usize) -> EvalSummary {
    let policy = TwoBins::with_strategy(strategy);
    let traces: Vec<_> = (0..episodes)
        .map(|_| policy.run(env, None).unwrap())
        .collect();
    EvalSummary::from_online(&traces)
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
