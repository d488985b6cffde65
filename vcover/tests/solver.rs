// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios from `spec.md` §8, driven entirely through the public API.

use std::collections::HashSet;
use vcover::{Config, Graph, VertexId};

fn cover_for(edges: &[(&str, &str)]) -> (Graph, Vec<VertexId>) {
    let mut g = Graph::from_edges(edges.iter().map(|&(a, b)| (a.to_string(), b.to_string())));
    let cover = vcover::solve(&mut g, &Config::default());
    (g, cover)
}

fn assert_covers_every_edge(g: &Graph, cover: &[VertexId]) {
    let set: HashSet<VertexId> = cover.iter().copied().collect();
    for &e in g.live_edges() {
        let (a, b) = g.endpoints(e);
        assert!(set.contains(&a) || set.contains(&b));
    }
}

#[test]
fn triangle() {
    let (g, cover) = cover_for(&[("a", "b"), ("b", "c"), ("c", "a")]);
    assert_eq!(cover.len(), 2);
    assert_covers_every_edge(&g, &cover);
}

#[test]
fn star_k14() {
    let (g, cover) = cover_for(&[("c", "a"), ("c", "b"), ("c", "d"), ("c", "e")]);
    let c = g.vertex_by_name("c").unwrap();
    assert_eq!(cover, vec![c]);
}

#[test]
fn path_p5() {
    let (g, cover) = cover_for(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")]);
    assert_eq!(cover.len(), 2);
    assert_covers_every_edge(&g, &cover);

    let b = g.vertex_by_name("b").unwrap();
    let d = g.vertex_by_name("d").unwrap();
    let mut expect = vec![b, d];
    expect.sort();
    let mut got = cover;
    got.sort();
    assert_eq!(got, expect);
}

#[test]
fn two_disjoint_edges() {
    let (g, cover) = cover_for(&[("a", "b"), ("c", "d")]);
    assert_eq!(cover.len(), 2);
    assert_covers_every_edge(&g, &cover);
}

#[test]
fn c6() {
    let (g, cover) = cover_for(&[
        ("v1", "v2"),
        ("v2", "v3"),
        ("v3", "v4"),
        ("v4", "v5"),
        ("v5", "v6"),
        ("v6", "v1"),
    ]);
    assert_eq!(cover.len(), 3);
    assert_covers_every_edge(&g, &cover);
}

#[test]
fn k4() {
    let (g, cover) = cover_for(&[
        ("a", "b"),
        ("a", "c"),
        ("a", "d"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
    ]);
    assert_eq!(cover.len(), 3);
    assert_covers_every_edge(&g, &cover);
}

#[test]
fn self_loop() {
    let (g, cover) = cover_for(&[("x", "x")]);
    let x = g.vertex_by_name("x").unwrap();
    assert_eq!(cover, vec![x]);
}

#[test]
fn duplicate_edges() {
    let (g, cover) = cover_for(&[("a", "b"), ("b", "a"), ("a", "b")]);
    assert_eq!(cover.len(), 1);
    assert_covers_every_edge(&g, &cover);
}

#[test]
fn solve_does_not_mutate_the_graph() {
    let mut g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
    let live_before = g.live_vertex_count();
    let edges_before = g.uncovered_edge_count();
    vcover::solve(&mut g, &Config::default());
    assert_eq!(g.live_vertex_count(), live_before);
    assert_eq!(g.uncovered_edge_count(), edges_before);
}
