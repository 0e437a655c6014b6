//! `spokes critical` — betweenness-ranked critical nodes.

use anyhow::Result;
use clap::Args;

use spokes_core::query;
use spokes_core::topology::Topology;

use crate::output::{self, OutputOpts};

/// Arguments for `spokes critical`.
#[derive(Args, Debug)]
pub struct CriticalArgs {
    /// How many nodes to rank.
    #[arg(short = 'n', long = "top", default_value_t = 5)]
    pub top: usize,
}

pub fn run(topo: &Topology, args: &CriticalArgs, opts: OutputOpts) -> Result<()> {
    let ranking = query::critical_nodes(topo, args.top);

    output::emit(opts, &ranking, || {
        output::section(&format!("Top {} critical nodes", ranking.entries.len()));
        for (rank, entry) in ranking.entries.iter().enumerate() {
            let tier = topo
                .node(&entry.id)
                .map_or("unknown", |node| node.tier.name());
            println!(
                "  {:>2}. {:<4} ({tier:<12}) criticality {:.4}",
                rank + 1,
                entry.id,
                entry.score
            );
        }
        if !opts.quiet {
            println!("Higher scores carry more shortest-path traffic; losing them hurts most.");
        }
    })
}
