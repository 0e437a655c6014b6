//! `spokes overview` — network statistics and optional display layout.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use spokes_core::query;
use spokes_core::topology::Topology;

use crate::layout;
use crate::output::{self, OutputOpts};

/// Arguments for `spokes overview`.
#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Include layered 2-D coordinates for drawing collaborators.
    #[arg(long)]
    pub layout: bool,
}

pub fn run(topo: &Topology, args: &OverviewArgs, opts: OutputOpts) -> Result<()> {
    let stats = query::network_stats(topo);

    if args.layout {
        let positions = layout::layered_positions(topo);
        let payload = json!({ "stats": &stats, "layout": &positions });
        return output::emit(opts, &payload, || {
            render_stats(&stats, opts);
            output::section("Layout");
            for position in &positions {
                println!(
                    "  {:<4} {:<12} x={:>5.1} y={:>5.1}",
                    position.id,
                    position.tier.name(),
                    position.x,
                    position.y
                );
            }
        });
    }

    output::emit(opts, &stats, || render_stats(&stats, opts))
}

fn render_stats(stats: &spokes_core::stats::NetworkStats, opts: OutputOpts) {
    output::section("Network overview");
    output::kv("nodes", stats.node_count);
    output::kv("edges", stats.edge_count);
    for (tier, count) in &stats.tier_counts {
        output::kv(tier.name(), count);
    }
    output::kv("density", format!("{:.3}", stats.density));

    if opts.quiet {
        return;
    }

    if let (Some(min), Some(max), Some(mean)) =
        (stats.min_weight, stats.max_weight, stats.mean_weight)
    {
        output::kv(
            "lane cost",
            format!("min ${min} / max ${max} / mean ${mean:.1}"),
        );
    }
    output::kv("total lane cost", format!("${}", stats.total_weight));
    output::kv("mean degree", format!("{:.2}", stats.mean_degree));

    if let Some((id, degree)) = &stats.busiest_origin {
        output::kv("busiest origin", format!("{id} ({degree} outgoing)"));
    }
    if let Some((id, degree)) = &stats.busiest_destination {
        output::kv("busiest destination", format!("{id} ({degree} incoming)"));
    }
    if let Some(pct) = stats.connectivity_pct {
        output::kv("supplier->store", format!("{pct:.1}% connected"));
    }
    if let Some(mean) = stats.mean_route_cost {
        output::kv("mean route cost", format!("${mean:.1}"));
    }
}
