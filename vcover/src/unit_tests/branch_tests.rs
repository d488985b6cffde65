// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::Config;
use crate::graph::{Graph, VertexId};

/// Every uncovered edge of `g` has an endpoint in `cover` (`spec.md` §8, property 5).
fn assert_is_cover(g: &Graph, cover: &[VertexId]) {
    let set: std::collections::HashSet<VertexId> = cover.iter().copied().collect();
    for &e in g.live_edges() {
        let (a, b) = g.endpoints(e);
        assert!(set.contains(&a) || set.contains(&b), "edge {:?}-{:?} uncovered", a, b);
    }
}

fn solve_sizes(edges: impl IntoIterator<Item = (&'static str, &'static str)>) -> (usize, Graph) {
    let mut g = Graph::from_edges(edges.into_iter().map(|(a, b)| (a.to_string(), b.to_string())));
    let before_live = g.live_vertex_count();
    let before_edges = g.uncovered_edge_count();
    let cover = crate::solve(&mut g, &Config::default());
    assert_is_cover(&g, &cover);
    // Solving leaves the graph exactly as it was.
    assert_eq!(g.live_vertex_count(), before_live);
    assert_eq!(g.uncovered_edge_count(), before_edges);
    (cover.len(), g)
}

#[test]
fn triangle_cover_size_two() {
    let (size, _) = solve_sizes([("a", "b"), ("b", "c"), ("c", "a")]);
    assert_eq!(size, 2);
}

#[test]
fn star_k14_cover_is_the_center() {
    let mut g = Graph::from_edges([("c", "a"), ("c", "b"), ("c", "d"), ("c", "e")]);
    let cover = crate::solve(&mut g, &Config::default());
    let c = g.vertex_by_name("c").unwrap();
    assert_eq!(cover, vec![c]);
}

#[test]
fn path_p5_cover_size_two() {
    let (size, _) = solve_sizes([("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")]);
    assert_eq!(size, 2);
}

#[test]
fn two_disjoint_edges_cover_size_two() {
    let (size, _) = solve_sizes([("a", "b"), ("c", "d")]);
    assert_eq!(size, 2);
}

#[test]
fn c6_cover_size_three() {
    let (size, _) = solve_sizes([
        ("v1", "v2"),
        ("v2", "v3"),
        ("v3", "v4"),
        ("v4", "v5"),
        ("v5", "v6"),
        ("v6", "v1"),
    ]);
    assert_eq!(size, 3);
}

#[test]
fn k4_cover_size_three() {
    let (size, _) = solve_sizes([
        ("a", "b"),
        ("a", "c"),
        ("a", "d"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
    ]);
    assert_eq!(size, 3);
}

#[test]
fn self_loop_forces_the_vertex_in() {
    let mut g = Graph::from_edges([("x", "x")]);
    let cover = crate::solve(&mut g, &Config::default());
    assert_eq!(cover.len(), 1);
    let x = g.vertex_by_name("x").unwrap();
    assert_eq!(cover, vec![x]);
}

#[test]
fn duplicate_edges_collapse_to_one_edge() {
    let (size, _) = solve_sizes([("a", "b"), ("b", "a"), ("a", "b")]);
    assert_eq!(size, 1);
}

#[test]
fn solve_is_idempotent_across_repeated_calls() {
    // Since `solve` restores `g`, calling it twice must give the same answer.
    let mut g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
    let cfg = Config::default();
    let first = crate::solve(&mut g, &cfg).len();
    let second = crate::solve(&mut g, &cfg).len();
    assert_eq!(first, second);
}

#[test]
fn components_disabled_still_finds_the_optimum() {
    let mut g = Graph::from_edges([("a", "b"), ("c", "d")]);
    let mut cfg = Config::default();
    cfg.components = false;
    let cover = crate::solve(&mut g, &cfg);
    assert_eq!(cover.len(), 2);
}

#[test]
fn bounds_disabled_still_finds_the_optimum() {
    let mut g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
    let mut cfg = Config::default();
    cfg.lp_bound = false;
    cfg.clique_bound = false;
    cfg.mirror = false;
    let cover = crate::solve(&mut g, &cfg);
    assert_eq!(cover.len(), 2);
}
