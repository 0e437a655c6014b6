//! `spokes alternatives` — ranked alternative routes.

use anyhow::Result;
use clap::Args;

use spokes_core::query;
use spokes_core::topology::Topology;

use crate::output::{self, OutputOpts};

/// Arguments for `spokes alternatives`.
#[derive(Args, Debug)]
pub struct AlternativesArgs {
    /// Origin node id.
    pub source: String,

    /// Destination node id.
    pub target: String,

    /// How many routes to rank.
    #[arg(short = 'k', long = "count", default_value_t = 3)]
    pub count: usize,
}

pub fn run(topo: &Topology, args: &AlternativesArgs, opts: OutputOpts) -> Result<()> {
    match query::alternative_routes(topo, &args.source, &args.target, args.count) {
        Ok(routes) => output::emit(opts, &routes, || {
            output::section(&format!(
                "Top {} routes {} -> {}",
                routes.len(),
                args.source,
                args.target
            ));
            for (rank, route) in routes.iter().enumerate() {
                println!(
                    "  #{:<2} ${:<6} {}",
                    rank + 1,
                    route.total_cost,
                    route.nodes.join(" -> ")
                );
            }
        }),
        Err(err) => Err(output::failure(err, opts)),
    }
}
