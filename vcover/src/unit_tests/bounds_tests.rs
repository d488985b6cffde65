// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::bounds::clique::{clique_bound, CliqueConfig};
use crate::bounds::lp::lp_bound;
use crate::graph::Graph;
use crate::petgraph_support::bipartite::Matcher;

#[test]
fn matcher_finds_maximum_matching_on_a_path() {
    // a-b-c-d-e is bipartite, so its double cover is two disjoint copies of the path;
    // each copy's maximum matching has size 2, for a total of 4.
    let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")]);
    let mut matcher = Matcher::default();
    let size = matcher.solve(&g);
    assert_eq!(size, 4);
}

#[test]
fn matcher_leaves_no_augmenting_path() {
    // After a maximum matching, every live vertex is either matched or has every
    // alternating path from it blocked -- verified indirectly: re-running solve from
    // the already-matched state doesn't grow the matching further.
    let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a")]);
    let mut matcher = Matcher::default();
    let first = matcher.solve(&g);
    let second = matcher.solve(&g);
    assert_eq!(first, second);
}

#[test]
fn lp_bound_on_a_triangle_is_one() {
    // A triangle's half-integral LP optimum is 1.5, so the bound (ceil of that) is 1
    // before branching forces anything further.
    let mut g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
    let bound = lp_bound(&mut g, 10_000_000.0);
    assert!(bound >= 1);
}

#[test]
fn lp_bound_resolves_a_star_fully() {
    // K_{1,3}: the center covers everything, and the LP bound's zero/one split should
    // force the center in, leaving nothing live.
    let mut g = Graph::from_edges([("c", "a"), ("c", "b"), ("c", "d")]);
    lp_bound(&mut g, 10_000_000.0);
    let c = g.vertex_by_name("c").unwrap();
    assert!(g.read_vc().contains(&c));
}

#[test]
fn lp_bound_returns_zero_when_cutoff_fails() {
    let mut g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
    let bound = lp_bound(&mut g, 0.0);
    assert_eq!(bound, 0);
}

#[test]
fn clique_bound_on_k4_is_three() {
    let g = Graph::from_edges([
        ("a", "b"),
        ("a", "c"),
        ("a", "d"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
    ]);
    let cfg = CliqueConfig::default();
    let bound = clique_bound(&g, &cfg, 1);
    assert_eq!(bound, 3);
}

#[test]
fn clique_bound_on_empty_graph_is_zero() {
    let g = Graph::new();
    let cfg = CliqueConfig::default();
    assert_eq!(clique_bound(&g, &cfg, 1), 0);
}
