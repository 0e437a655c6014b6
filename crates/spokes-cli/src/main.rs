#![forbid(unsafe_code)]
//! `spokes` — CLI for the logistics network analytics core.
//!
//! The binary is a thin collaborator: it owns process startup, argument
//! parsing, logging initialization, and rendering. Every query runs
//! through the `spokes_core::query` facade against an explicit topology
//! handle — either the canonical seed network or a TOML definition
//! supplied with `--network`.

mod cmd;
mod layout;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spokes_core::topology::Topology;
use spokes_core::{config, seed};

use output::{OutputMode, OutputOpts};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "spokes: multi-tier logistics network analyzer",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Load the topology from a TOML network definition instead of the
    /// built-in seed network.
    #[arg(long, global = true, value_name = "FILE")]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output options from flags.
    fn output_opts(&self) -> OutputOpts {
        OutputOpts {
            mode: if self.json {
                OutputMode::Json
            } else {
                OutputMode::Human
            },
            quiet: self.quiet,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Show network statistics",
        after_help = "EXAMPLES:\n    # Summary of the seed network\n    spokes overview\n\n    # Include display coordinates, machine-readable\n    spokes overview --layout --json"
    )]
    Overview(cmd::overview::OverviewArgs),

    #[command(
        about = "Find the cheapest route between two nodes",
        after_help = "EXAMPLES:\n    # Supplier S1 to store R10\n    spokes route S1 R10\n\n    # Machine-readable\n    spokes route S1 R10 --json"
    )]
    Route(cmd::route::RouteArgs),

    #[command(
        about = "Rank alternative routes by cost",
        after_help = "EXAMPLES:\n    # Top 5 alternatives\n    spokes alternatives S1 R10 -k 5"
    )]
    Alternatives(cmd::alternatives::AlternativesArgs),

    #[command(
        about = "Solve the minimum-cost tier assignment",
        after_help = "EXAMPLES:\n    # Suppliers to warehouses (the default pairing)\n    spokes assign\n\n    # Any tier pairing\n    spokes assign warehouse distribution"
    )]
    Assign(cmd::assign::AssignArgs),

    #[command(
        about = "Rank nodes by betweenness criticality",
        after_help = "EXAMPLES:\n    # The five most critical nodes\n    spokes critical\n\n    # A longer ranking\n    spokes critical -n 10"
    )]
    Critical(cmd::critical::CriticalArgs),

    #[command(
        about = "Compute tier-to-tier maximum flow",
        after_help = "EXAMPLES:\n    # Suppliers to stores (the default pairing)\n    spokes flow\n\n    # Any tier pairing\n    spokes flow warehouse hub"
    )]
    Flow(cmd::flow::FlowArgs),

    #[command(
        about = "Simulate a node failure and compare routes",
        after_help = "EXAMPLES:\n    # What does losing D2 do to S1 -> R10?\n    spokes simulate D2 S1 R10"
    )]
    Simulate(cmd::simulate::SimulateArgs),

    #[command(
        about = "Count distinct simple routes within a hop budget",
        after_help = "EXAMPLES:\n    # Redundancy between W1 and R1\n    spokes routes W1 R1 --max-hops 8"
    )]
    Routes(cmd::routes::RoutesArgs),
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_topology(cli: &Cli) -> anyhow::Result<Topology> {
    let topo = cli.network.as_ref().map_or_else(
        || Ok(seed::default_network()),
        |path| config::load_network(path),
    )?;
    tracing::debug!(
        nodes = topo.node_count(),
        edges = topo.edge_count(),
        "topology loaded"
    );
    Ok(topo)
}

fn dispatch(cli: &Cli, topo: &Topology) -> anyhow::Result<()> {
    let opts = cli.output_opts();
    match &cli.command {
        Commands::Overview(args) => cmd::overview::run(topo, args, opts),
        Commands::Route(args) => cmd::route::run(topo, args, opts),
        Commands::Alternatives(args) => cmd::alternatives::run(topo, args, opts),
        Commands::Assign(args) => cmd::assign::run(topo, args, opts),
        Commands::Critical(args) => cmd::critical::run(topo, args, opts),
        Commands::Flow(args) => cmd::flow::run(topo, args, opts),
        Commands::Simulate(args) => cmd::simulate::run(topo, args, opts),
        Commands::Routes(args) => cmd::routes::run(topo, args, opts),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let topo = match load_topology(&cli) {
        Ok(topo) => topo,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch(&cli, &topo) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
