//! Courier command line runner.
//!
//! Loads an ASCII map, runs a delivery agent with the selected planner,
//! prints the run report, and optionally renders the grid with the
//! traveled route. Exit code 0 means the delivery arrived; 1 means it
//! failed or ran out of ticks; 2 means the map or arguments were bad.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use courier_agent::{AgentState, DeliveryAgent, RunReport};
use courier_grid::{load_map_path, MapError, MapFile};
use courier_plan::Planner;
use tracing::info;

#[derive(Parser)]
#[command(name = "courier", version, about = "Grid path-planning delivery simulator")]
struct Cli {
    /// Map file (see courier-grid docs for the format).
    map: PathBuf,

    /// Planning algorithm: bfs, ucs, astar, or local.
    #[arg(long, default_value = "astar")]
    planner: Planner,

    /// Seed for local-search restart sampling. Ignored by the other
    /// planners.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Tick budget before an unfinished run is abandoned.
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Render the grid and the traveled route as ASCII.
    #[arg(long)]
    visualize: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, MapError> {
    let MapFile { grid, start, goal } = load_map_path(&cli.map)?;
    info!(map = %cli.map.display(), %start, %goal, planner = %cli.planner, "loaded map");

    let mut planner = cli.planner;
    if let Planner::Local(config) = &mut planner {
        config.seed = cli.seed;
    }

    let mut agent = DeliveryAgent::new(&grid, planner, start, goal);
    let report = agent.run(cli.max_ticks);

    if cli.visualize {
        print!("{}", render::render(&grid, agent.trail(), start, goal));
    }
    print_report(&report);
    if let Some(err) = agent.last_error() {
        eprintln!("planning error: {err}");
    }

    Ok(match report.outcome {
        AgentState::Arrived => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    })
}

fn print_report(report: &RunReport) {
    println!("outcome:        {}", report.outcome);
    println!("ticks:          {}", report.ticks);
    println!("fuel used:      {}", report.fuel_used);
    println!("replans:        {}", report.replans);
    println!("nodes expanded: {}", report.nodes_expanded);
    println!(
        "final path:     {} steps, cost {}",
        report.path_steps, report.path_cost
    );
}
