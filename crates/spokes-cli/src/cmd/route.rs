//! `spokes route` — cheapest route between two nodes.

use anyhow::Result;
use clap::Args;

use spokes_core::query;
use spokes_core::topology::Topology;

use crate::output::{self, OutputOpts};

/// Arguments for `spokes route`.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Origin node id.
    pub source: String,

    /// Destination node id.
    pub target: String,
}

pub fn run(topo: &Topology, args: &RouteArgs, opts: OutputOpts) -> Result<()> {
    match query::shortest_route(topo, &args.source, &args.target) {
        Ok(report) => output::emit(opts, &report, || {
            output::section(&format!("Cheapest route {} -> {}", args.source, args.target));
            println!("{}", report.nodes.join(" -> "));
            output::kv("total cost", format!("${}", report.total_cost));
            output::kv("hops", report.legs.len());

            if !opts.quiet {
                let mut running = 0.0;
                for (step, leg) in report.legs.iter().enumerate() {
                    running += leg.cost;
                    println!(
                        "  step {:>2}: {:<4} -> {:<4} ${:<6} (running ${running})",
                        step + 1,
                        leg.from,
                        leg.to,
                        leg.cost
                    );
                }
            }
        }),
        Err(err) => Err(output::failure(err, opts)),
    }
}
