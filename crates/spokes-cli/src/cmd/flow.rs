//! `spokes flow` — tier-to-tier maximum flow.

use anyhow::Result;
use clap::Args;

use spokes_core::query;
use spokes_core::topology::Topology;

use crate::cmd::parse_tier;
use crate::output::{self, OutputOpts};

/// Arguments for `spokes flow`.
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// Aggregated source tier.
    #[arg(default_value = "supplier")]
    pub from: String,

    /// Aggregated sink tier.
    #[arg(default_value = "store")]
    pub to: String,
}

pub fn run(topo: &Topology, args: &FlowArgs, opts: OutputOpts) -> Result<()> {
    let source_tier = parse_tier(&args.from)?;
    let sink_tier = parse_tier(&args.to)?;

    match query::max_flow(topo, source_tier, sink_tier) {
        Ok(report) => output::emit(opts, &report, || {
            output::section(&format!("Maximum flow {source_tier} -> {sink_tier}"));
            output::kv("flow value", report.value);
            if !opts.quiet {
                for entry in &report.per_source {
                    println!("  {:<4} ships {}", entry.id, entry.flow);
                }
            }
        }),
        Err(err) => Err(output::failure(err, opts)),
    }
}
