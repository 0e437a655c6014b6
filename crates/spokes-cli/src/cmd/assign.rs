//! `spokes assign` — minimum-cost tier-to-tier assignment.

use anyhow::Result;
use clap::Args;

use spokes_core::query;
use spokes_core::topology::Topology;

use crate::cmd::parse_tier;
use crate::output::{self, OutputOpts};

/// Arguments for `spokes assign`.
#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Tier providing the rows of the assignment.
    #[arg(default_value = "supplier")]
    pub from: String,

    /// Tier providing the columns of the assignment.
    #[arg(default_value = "warehouse")]
    pub to: String,
}

pub fn run(topo: &Topology, args: &AssignArgs, opts: OutputOpts) -> Result<()> {
    let tier_a = parse_tier(&args.from)?;
    let tier_b = parse_tier(&args.to)?;

    match query::optimal_assignment(topo, tier_a, tier_b) {
        Ok(report) => output::emit(opts, &report, || {
            output::section(&format!("Optimal {tier_a} -> {tier_b} assignment"));
            for pair in &report.pairs {
                println!("  {:<4} -> {:<4} ${}", pair.from, pair.to, pair.cost);
            }
            output::kv("total cost", format!("${}", report.total_cost));
        }),
        Err(err) => Err(output::failure(err, opts)),
    }
}
