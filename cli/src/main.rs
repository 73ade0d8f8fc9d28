//! `queue-sim` - command-line front end for the queue simulator core
//!
//! ```text
//! queue-sim random --arrival-rate 0.9 --service-rate 0.5 --servers 2 --duration 480 --seed 7
//! queue-sim random --config params.json --servers 3
//! queue-sim replay arrivals.csv --servers 2 --json
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the `info` default); the report
//! or JSON goes to stdout.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use queue_simulator_core_rs::{run_dataset, run_random, RngManager, SimulationParameters, SimulationRun};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "queue-sim")]
#[command(about = "Multi-server FCFS queue (M/M/c) simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the full run (every entity plus the summary) as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw exponential inter-arrival and service times up to a horizon
    Random(RandomArgs),

    /// Replay inter-arrival/service times from a delimited text file
    Replay {
        /// CSV, semicolon- or tab-separated file with a header row
        file: PathBuf,

        /// Number of servers
        #[arg(long, default_value = "1")]
        servers: usize,
    },
}

#[derive(clap::Args, Debug)]
struct RandomArgs {
    /// JSON file with arrival_rate, service_rate, num_servers, duration.
    /// Flags given on the command line override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mean arrivals per unit time
    #[arg(long)]
    arrival_rate: Option<f64>,

    /// Mean service completions per unit time per server
    #[arg(long)]
    service_rate: Option<f64>,

    /// Number of servers
    #[arg(long)]
    servers: Option<usize>,

    /// Arrival horizon
    #[arg(long)]
    duration: Option<f64>,

    /// RNG seed (derived from the clock if not provided)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let run = match &cli.command {
        Command::Random(args) => {
            let params = resolve_params(args)?;
            let (mut rng, seed) = match args.seed {
                Some(seed) => (RngManager::new(seed), seed),
                None => RngManager::from_clock(),
            };
            tracing::info!(seed, "random source seeded");
            run_random(&params, &mut rng)?
        }
        Command::Replay { file, servers } => {
            let text = fs::read_to_string(file)?;
            tracing::info!(file = %file.display(), bytes = text.len(), "dataset loaded");
            run_dataset(&text, *servers)?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        print_report(&run);
    }

    Ok(())
}

/// Merge the optional config file with command-line flags.
fn resolve_params(args: &RandomArgs) -> Result<SimulationParameters, Box<dyn Error>> {
    let from_file = match &args.config {
        Some(path) => Some(SimulationParameters::from_json_str(&fs::read_to_string(path)?)?),
        None => None,
    };

    let arrival_rate = args
        .arrival_rate
        .or(from_file.as_ref().map(|p| p.arrival_rate))
        .ok_or("missing --arrival-rate (or a --config file)")?;
    let service_rate = args
        .service_rate
        .or(from_file.as_ref().map(|p| p.service_rate))
        .ok_or("missing --service-rate (or a --config file)")?;
    let num_servers = args
        .servers
        .or(from_file.as_ref().map(|p| p.num_servers))
        .ok_or("missing --servers (or a --config file)")?;
    let duration = args
        .duration
        .or(from_file.as_ref().map(|p| p.duration))
        .ok_or("missing --duration (or a --config file)")?;

    Ok(SimulationParameters {
        arrival_rate,
        service_rate,
        num_servers,
        duration,
    })
}

fn print_report(run: &SimulationRun) {
    let s = &run.summary;

    println!("Entities:             {}", s.total_entities);
    println!("  served by horizon:  {}", s.served_entities);
    println!("  had to wait:        {}", s.waited_entities);
    if run.dropped_rows > 0 {
        println!("  dropped rows:       {}", run.dropped_rows);
    }
    println!("Horizon:              {:.4}", run.duration);
    println!("Average wait:         {:.4}", s.average_wait);
    println!("Max wait:             {:.4}", s.max_wait);
    println!("Avg time in system:   {:.4}", s.average_time_in_system);
    println!("Utilization:          {:.2} %", s.utilization_pct);
    println!(
        "Avg queue length:     {:.4}  (λ = {:.4})",
        s.average_queue_length, run.arrival_rate
    );

    println!();
    println!("{:>6}  {:>8}  {:>12}  {:>11}", "server", "served", "busy time", "utilization");
    for server in &s.servers {
        println!(
            "{:>6}  {:>8}  {:>12.4}  {:>9.2} %",
            server.server, server.entities_served, server.busy_time, server.utilization_pct
        );
    }
}
