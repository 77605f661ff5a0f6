//! Weave CLI: simulation, benchmarking, and debugging.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "weave")]
#[command(version, about = "Weave: 2D Verlet cloth simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from an input file.
    Simulate {
        /// Path to simulation input (TOML).
        #[arg(short, long, default_value = "simulation.toml")]
        config: String,

        /// Override the number of steps.
        #[arg(long)]
        steps: Option<u64>,

        /// Write frames to this JSON file.
        #[arg(short, long)]
        output: Option<String>,

        /// Write a binary snapshot of the final state.
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (hanging_cloth, unravel, floor_drop, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,

        /// Use colored (parallel batch) relaxation.
        #[arg(long)]
        colored: bool,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a simulation input.
    Validate {
        /// Path to input file (TOML).
        path: String,
    },
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            steps,
            output,
            snapshot,
        } => commands::simulate(&config, steps, output.as_deref(), snapshot.as_deref()),
        Commands::Benchmark {
            scenario,
            output,
            colored,
        } => commands::benchmark(&scenario, output.as_deref(), colored),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
