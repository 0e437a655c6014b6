//! Contract tests for the canonical seed network.
//!
//! The ids, tier sizes, edge count, and weight range of the default
//! network are a fixed contract with embedders. These tests pin the
//! exact shape so an accidental edit to the seed tables is caught
//! immediately.

use spokes_core::query;
use spokes_core::seed::default_network;
use spokes_core::topology::Tier;

#[test]
fn node_and_edge_counts() {
    let topo = default_network();
    assert_eq!(topo.node_count(), 29);
    assert_eq!(topo.edge_count(), 72);
}

#[test]
fn tier_sizes_and_ids() {
    let topo = default_network();

    let suppliers = topo.tier_members(Tier::Supplier);
    assert_eq!(suppliers, vec!["S1", "S2", "S3", "S4", "S5", "S6"]);

    let warehouses = topo.tier_members(Tier::Warehouse);
    assert_eq!(warehouses, vec!["W1", "W2", "W3", "W4", "W5"]);

    let distributions = topo.tier_members(Tier::Distribution);
    assert_eq!(distributions, vec!["D1", "D2", "D3", "D4"]);

    let hubs = topo.tier_members(Tier::Hub);
    assert_eq!(hubs, vec!["H1", "H2", "H3", "H4"]);

    let stores = topo.tier_members(Tier::Store);
    assert_eq!(
        stores,
        vec!["R1", "R10", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9"]
    );
}

#[test]
fn weights_stay_in_the_documented_range() {
    let topo = default_network();
    for (src, dst, data) in topo.edges() {
        assert!(
            (4.0..=28.0).contains(&data.weight),
            "edge {src} -> {dst} weight {} out of the $4–$28 contract",
            data.weight
        );
        assert_eq!(data.capacity, None, "seed edges carry no capacity attribute");
    }
}

#[test]
fn spot_checked_lanes() {
    let topo = default_network();
    assert_eq!(topo.edge_weight("S1", "W1"), Some(10.0));
    assert_eq!(topo.edge_weight("W1", "D1"), Some(5.0));
    assert_eq!(topo.edge_weight("W3", "R5"), Some(28.0));
    assert_eq!(topo.edge_weight("D1", "H1"), Some(4.0));
    assert_eq!(topo.edge_weight("H4", "R10"), Some(12.0));
    // Lanes are directed: no reverse edges exist.
    assert_eq!(topo.edge_weight("W1", "S1"), None);
}

#[test]
fn every_supplier_reaches_every_store() {
    let topo = default_network();
    for supplier in topo.tier_members(Tier::Supplier) {
        for store in topo.tier_members(Tier::Store) {
            assert!(
                query::shortest_route(&topo, &supplier, &store).is_ok(),
                "{supplier} cannot reach {store}"
            );
        }
    }

    let stats = query::network_stats(&topo);
    assert_eq!(stats.connectivity_pct, Some(100.0));
}

#[test]
fn the_flagship_route_is_stable() {
    let topo = default_network();
    let report = query::shortest_route(&topo, "S1", "R10").expect("route");
    assert_eq!(report.nodes, vec!["S1", "W1", "D3", "H4", "R10"]);
    assert!((report.total_cost - 40.0).abs() < 1e-10);
}

#[test]
fn seed_stats_match_the_shape() {
    let topo = default_network();
    let stats = query::network_stats(&topo);

    assert_eq!(stats.node_count, 29);
    assert_eq!(stats.edge_count, 72);
    assert_eq!(stats.tier_counts[&Tier::Supplier], 6);
    assert_eq!(stats.tier_counts[&Tier::Warehouse], 5);
    assert_eq!(stats.tier_counts[&Tier::Distribution], 4);
    assert_eq!(stats.tier_counts[&Tier::Hub], 4);
    assert_eq!(stats.tier_counts[&Tier::Store], 10);
    assert_eq!(stats.min_weight, Some(4.0));
    assert_eq!(stats.max_weight, Some(28.0));
}
