//! `spokes simulate` — failure-simulated rerouting.

use anyhow::Result;
use clap::Args;

use spokes_core::query;
use spokes_core::query::RouteReport;
use spokes_core::topology::Topology;

use crate::output::{self, OutputOpts};

/// Arguments for `spokes simulate`.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Node to take out of service.
    pub node: String,

    /// Origin node id.
    pub source: String,

    /// Destination node id.
    pub target: String,
}

fn describe(route: Option<&RouteReport>) -> String {
    route.map_or_else(
        || "no route".to_owned(),
        |r| format!("{} (${})", r.nodes.join(" -> "), r.total_cost),
    )
}

pub fn run(topo: &Topology, args: &SimulateArgs, opts: OutputOpts) -> Result<()> {
    match query::simulate_failure(topo, &args.node, &args.source, &args.target) {
        Ok(report) => output::emit(opts, &report, || {
            output::section(&format!(
                "Failure of {} for {} -> {}",
                report.failed_node, args.source, args.target
            ));
            output::kv("before", describe(report.before.as_ref()));
            output::kv("after", describe(report.after.as_ref()));
            if let Some(pct) = report.cost_increase_pct {
                output::kv("cost impact", format!("{pct:+.1}%"));
            }
            if report.disconnected {
                println!("The network is disconnected for this pair after the failure.");
            }
        }),
        Err(err) => Err(output::failure(err, opts)),
    }
}
