// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::Graph;

#[test]
fn from_edges_dedups_and_names_vertices() {
    let g = Graph::from_edges([("a", "b"), ("b", "a")]);
    assert_eq!(g.live_vertex_count(), 2);
    assert_eq!(g.uncovered_edge_count(), 1);
    let a = g.vertex_by_name("a").unwrap();
    let b = g.vertex_by_name("b").unwrap();
    assert_eq!(g.degree(a), 1);
    assert_eq!(g.degree(b), 1);
}

#[test]
fn self_loop_spawns_clone_forcing_vertex_in() {
    let g = Graph::from_edges([("x", "x")]);
    // The original vertex plus its dummy clone.
    assert_eq!(g.live_vertex_count(), 2);
    assert_eq!(g.uncovered_edge_count(), 1);
    let x = g.vertex_by_name("x").unwrap();
    assert_eq!(g.degree(x), 1);
}

#[test]
fn vertex_by_name_unknown_is_an_error() {
    let g = Graph::from_edges([("a", "b")]);
    assert!(g.vertex_by_name("nope").is_err());
}

#[test]
fn add_to_vc_covers_all_incident_edges() {
    let mut g = Graph::from_edges([("a", "b"), ("a", "c"), ("a", "d")]);
    let a = g.vertex_by_name("a").unwrap();
    g.add_to_vc(a);
    assert_eq!(g.degree(a), 0);
    for name in ["b", "c", "d"] {
        let v = g.vertex_by_name(name).unwrap();
        assert_eq!(g.degree(v), 0);
    }
    assert_eq!(g.uncovered_edge_count(), 0);
    assert_eq!(g.read_vc().len(), 1);
}

#[test]
fn snapshot_round_trip_restores_degrees_and_cover() {
    let mut g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
    let before_live = g.live_vertex_count();
    let before_edges = g.uncovered_edge_count();

    let snap = g.create_snapshot();
    let a = g.vertex_by_name("a").unwrap();
    g.add_to_vc(a);
    assert!(g.degree(a) == 0);
    g.restore_snapshot(snap);

    assert_eq!(g.live_vertex_count(), before_live);
    assert_eq!(g.uncovered_edge_count(), before_edges);
    assert_eq!(g.degree(a), 2);
    assert!(g.read_vc().is_empty());
}

#[test]
fn fold_degree_two_merges_neighbors_and_translates_back() {
    // a-v-b path, v has degree 2 and no edge between a and b.
    let mut g = Graph::from_edges([("a", "v"), ("v", "b")]);
    let v = g.vertex_by_name("v").unwrap();
    let a = g.vertex_by_name("a").unwrap();
    let b = g.vertex_by_name("b").unwrap();

    let merged = g.fold_degree_two(v);
    assert_eq!(g.degree(v), 0);
    assert_eq!(g.degree(a), 0);
    assert_eq!(g.degree(b), 0);
    assert!(g.degree(merged) == 0);

    // Forcing the merged vertex into the cover should translate back to {a, b}.
    g.add_to_vc(merged);
    let mut cover = g.read_vc();
    cover.sort();
    let mut expect = vec![a, b];
    expect.sort();
    assert_eq!(cover, expect);
}

#[test]
fn fold_degree_two_not_taking_merged_forces_original() {
    let mut g = Graph::from_edges([("a", "v"), ("v", "b")]);
    let v = g.vertex_by_name("v").unwrap();
    g.fold_degree_two(v);
    // Not adding merged to VC: read_vc should force v itself in.
    let cover = g.read_vc();
    assert_eq!(cover, vec![v]);
}

#[test]
fn check_invariants_holds_after_mixed_operations() {
    let mut g = Graph::from_edges([
        ("a", "b"),
        ("b", "c"),
        ("c", "d"),
        ("d", "a"),
        ("a", "c"),
    ]);
    let a = g.vertex_by_name("a").unwrap();
    g.add_to_vc(a);
    g.check_invariants();
}
