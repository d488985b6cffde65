// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::Graph;
use crate::reductions::{clique_neighborhood, deg3, degree, domination, undeg3, unconfined};

#[test]
fn deg1_rule_forces_the_single_neighbor() {
    let mut g = Graph::from_edges([("a", "b")]);
    degree::deg1_rule(&mut g);
    assert_eq!(g.live_vertex_count(), 0);
    assert_eq!(g.read_vc().len(), 1);
}

#[test]
fn deg1_rule_cascades_through_a_star() {
    // a, c, d are all pendants of b: forcing b in leaves nothing else to force.
    let mut g = Graph::from_edges([("a", "b"), ("c", "b"), ("d", "b")]);
    degree::deg1_rule(&mut g);
    let b = g.vertex_by_name("b").unwrap();
    assert_eq!(g.read_vc(), vec![b]);
}

#[test]
fn deg2_rule_folds_a_chain_vertex() {
    let mut g = Graph::from_edges([("a", "v"), ("v", "b")]);
    let fired = degree::deg2_rule(&mut g);
    assert!(fired);
    // a, v, b and the synthesized merged vertex are all fully covered.
    assert_eq!(g.live_vertex_count(), 0);
    assert_eq!(g.read_vc().len(), 1);
}

#[test]
fn deg2_rule_forces_both_neighbors_when_they_are_adjacent() {
    // Triangle: folding v (degree 2) would need an edge a-b, which already exists,
    // so both a and b are forced into the cover instead.
    let mut g = Graph::from_edges([("a", "v"), ("v", "b"), ("a", "b")]);
    degree::deg2_rule(&mut g);
    let a = g.vertex_by_name("a").unwrap();
    let b = g.vertex_by_name("b").unwrap();
    let mut cover = g.read_vc();
    cover.sort();
    let mut expect = vec![a, b];
    expect.sort();
    assert_eq!(cover, expect);
}

#[test]
fn domination_rule_forces_the_dominating_neighbor() {
    // v is adjacent only to u; u is adjacent to v and to w. N[v] = {u,v} subseteq
    // N[u] = {u,v,w}, so u dominates v and must be forced in.
    let mut g = Graph::from_edges([("v", "u"), ("u", "w")]);
    domination::domination_rule(&mut g);
    let u = g.vertex_by_name("u").unwrap();
    assert!(g.read_vc().contains(&u));
}

#[test]
fn unconfined_rule_forces_an_isolated_edges_endpoint() {
    // For a lone edge a-b, S={a} grows to find u=b has zero neighbors outside N[S],
    // so a is unconfined and must be forced into the cover.
    let mut g = Graph::from_edges([("a", "b")]);
    let cfg = unconfined::UnconfinedConfig::default();
    unconfined::unconfined_rule(&mut g, &cfg);
    assert_eq!(g.read_vc().len(), 1);
}

#[test]
fn deg3_rule_shrinks_independent_neighborhood_gadget() {
    // v has three neighbors a, b, c forming an independent set, each otherwise
    // isolated: deg3_rule should replace v's gadget without changing the live count
    // growing unboundedly.
    let mut g = Graph::from_edges([("v", "a"), ("v", "b"), ("v", "c")]);
    let before = g.live_vertex_count();
    let cfg = deg3::Deg3Config::default();
    let fired = deg3::deg3_rule(&mut g, &cfg);
    assert!(fired);
    // v is gone; a, b, c remain, now mutually linked by the gadget.
    assert!(g.live_vertex_count() <= before);
}

#[test]
fn undeg3_rule_requires_no_op_on_small_independent_graphs() {
    // Two disjoint edges: no vertex has two non-adjacent neighbors, so the rule must
    // not fire (and, importantly, must not panic on an empty neighbor list).
    let mut g = Graph::from_edges([("a", "b"), ("c", "d")]);
    let fired = undeg3::undeg3_rule(&mut g);
    assert!(!fired);
}

#[test]
fn clique_neighborhood_rule_is_idempotent_on_a_clique() {
    // K4: every pair of neighbors is already adjacent, so C1 (the independent part)
    // is empty and no valid partition with c1_n >= 1 exists; the rule must not fire.
    let mut g = Graph::from_edges([
        ("a", "b"),
        ("a", "c"),
        ("a", "d"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
    ]);
    let cfg = clique_neighborhood::CnConfig::default();
    let fired = clique_neighborhood::clique_neighborhood_rule(&mut g, &cfg);
    assert!(!fired);
    assert_eq!(g.live_vertex_count(), 4);
}
