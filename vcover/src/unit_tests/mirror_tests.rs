// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::{Graph, VertexId};
use crate::mirror::mirrors;
use std::collections::HashSet;

/// Checks the soundness property from `spec.md` §8: every mirror `m` of `v` must
/// satisfy that `N(v) \ N(m)` induces a clique.
fn assert_is_sound_mirror(g: &Graph, v: VertexId, m: VertexId) {
    let n_m: HashSet<VertexId> = g.neighbors(m).collect();
    let diff: Vec<VertexId> = g.neighbors(v).filter(|u| !n_m.contains(u)).collect();
    for i in 0..diff.len() {
        for j in (i + 1)..diff.len() {
            assert!(
                g.edge_between(diff[i], diff[j]).is_some(),
                "N(v)\\N(m) is not a clique: {:?} and {:?} not adjacent",
                diff[i],
                diff[j]
            );
        }
    }
}

#[test]
fn mirror_of_triangle_apex_found() {
    // v-a, v-b, a-b form a triangle; m is adjacent to both a and b but not v, so
    // N(v) \ N(m) is empty and m mirrors v.
    let mut g = Graph::from_edges([("v", "a"), ("v", "b"), ("a", "b"), ("m", "a"), ("m", "b")]);
    let v = g.vertex_by_name("v").unwrap();
    let m = g.vertex_by_name("m").unwrap();

    let found = mirrors(&mut g, v);
    assert!(found.contains(&m));
    for &mirror in &found {
        assert_is_sound_mirror(&g, v, mirror);
    }
}

#[test]
fn no_mirrors_on_an_isolated_edge() {
    let mut g = Graph::from_edges([("a", "b")]);
    let a = g.vertex_by_name("a").unwrap();
    assert!(mirrors(&mut g, a).is_empty());
}

#[test]
fn mirrors_leaves_scratch_cleared() {
    let mut g = Graph::from_edges([("v", "a"), ("v", "b"), ("a", "b"), ("m", "a"), ("m", "b")]);
    let v = g.vertex_by_name("v").unwrap();
    mirrors(&mut g, v);
    assert!(g.scratch.marked.iter().all(|&b| !b));
}
