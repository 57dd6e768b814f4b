//! Runs a JSON-configured construction on a knapsack instance and prints
//! the objective value of the resulting solution.
//!
//! ```text
//! construct <seed> <instance> <configuration>
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_construct::config::Run;
use u_construct::knapsack::{KnapsackInstance, KnapsackProblem, KnapsackQuality};
use u_construct::problem::{Instance, Solution};

#[derive(Debug, Parser)]
#[command(name = "construct", version, about = "Constructive metaheuristics for 0/1 knapsack")]
struct Args {
    /// Seed for every stochastic selector.
    seed: u64,

    /// Knapsack instance file.
    instance: PathBuf,

    /// JSON run configuration.
    configuration: PathBuf,

    /// Score items by value/weight instead of value.
    #[arg(long)]
    density: bool,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    enable_tracing();

    let instance = KnapsackInstance::from_path(&args.instance)?;
    let run = Run::from_path(&args.configuration, args.seed)?;
    let quality = if args.density {
        KnapsackQuality::Density
    } else {
        KnapsackQuality::Value
    };

    tracing::info!(
        instance = %args.instance.display(),
        items = instance.num_elements(),
        capacity = instance.capacity(),
        "instance loaded"
    );

    let solution = run.run(&KnapsackProblem::new(quality), &instance);
    println!("{}", solution.objective_value());
    Ok(())
}
