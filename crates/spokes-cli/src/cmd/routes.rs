//! `spokes routes` — redundancy: count of bounded simple routes.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use spokes_core::query;
use spokes_core::topology::Topology;

use crate::output::{self, OutputOpts};

/// Arguments for `spokes routes`.
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Origin node id.
    pub source: String,

    /// Destination node id.
    pub target: String,

    /// Hop budget per route.
    #[arg(long, default_value_t = 10)]
    pub max_hops: usize,
}

pub fn run(topo: &Topology, args: &RoutesArgs, opts: OutputOpts) -> Result<()> {
    match query::route_count(topo, &args.source, &args.target, args.max_hops) {
        Ok(count) => {
            let payload = json!({
                "source": &args.source,
                "target": &args.target,
                "max_hops": args.max_hops,
                "count": count,
            });
            output::emit(opts, &payload, || {
                output::section(&format!("Redundancy {} -> {}", args.source, args.target));
                output::kv("routes", count);
                output::kv("hop budget", args.max_hops);
                if !opts.quiet {
                    if count > 1 {
                        println!("Multiple alternatives exist; the pair tolerates failures.");
                    } else if count == 1 {
                        println!("Single route only; any failure on it disconnects the pair.");
                    } else {
                        println!("No route within the hop budget.");
                    }
                }
            })
        }
        Err(err) => Err(output::failure(err, opts)),
    }
}
