// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The degree-3 independent-neighborhood gadget (`spec.md` §4.6): a degree-3 vertex
//! `v` whose neighbors `{a, b, c}` induce no edges is replaced by a small path gadget,
//! shrinking the graph while preserving the minimum cover size.

use crate::graph::{EdgeId, Graph, Modification, VertexId};
use std::collections::HashSet;

/// Knobs mirroring `DEG3_CUTOFF1`/`DEG3_CUTOFF2`.
#[derive(Clone, Copy, Debug)]
pub struct Deg3Config {
    pub cutoff1: usize,
    pub cutoff2: usize,
}

impl Default for Deg3Config {
    fn default() -> Self {
        Deg3Config { cutoff1: 30, cutoff2: 15 }
    }
}

/// Number of edges among `{a, b, c}`.
fn edges_among(g: &Graph, a: VertexId, b: VertexId, c: VertexId) -> usize {
    [(a, b), (b, c), (c, a)]
        .iter()
        .filter(|&&(x, y)| g.edge_between(x, y).is_some())
        .count()
}

/// Checks the feasibility gates before committing to the gadget: the combined
/// degree of `a`, `b`, `c` (still counting their edges to `v`) and the number of
/// edges the gadget would need to create.
fn feasible(g: &Graph, a: VertexId, b: VertexId, c: VertexId, cfg: &Deg3Config) -> bool {
    if g.degree(a) + g.degree(b) + g.degree(c) > cfg.cutoff1 + 1 {
        return false;
    }
    let s = [a, b, c];
    let mut new_edges = 0usize;
    for i in 0..3 {
        let u = s[i];
        let w = s[(i + 1) % 3];
        let u_nbrs: HashSet<VertexId> = g.neighbors(u).collect();
        new_edges += g.neighbors(w).filter(|x| !u_nbrs.contains(x)).count();
    }
    new_edges <= cfg.cutoff2
}

/// Applies the gadget to `v` if its neighborhood is independent and the feasibility
/// gates pass. Returns whether it fired.
pub(crate) fn try_deg3(g: &mut Graph, v: VertexId, cfg: &Deg3Config) -> bool {
    debug_assert_eq!(g.degree(v), 3);
    let nbrs: Vec<VertexId> = g.neighbors(v).collect();
    let (a, b, c) = (nbrs[0], nbrs[1], nbrs[2]);

    if edges_among(g, a, b, c) != 0 {
        return false;
    }
    if !feasible(g, a, b, c, cfg) {
        return false;
    }

    g.delete_vertex(v);

    let s = [a, b, c];
    let a_nbrs: HashSet<VertexId> = g.neighbors(a).collect();
    let b_nbrs: HashSet<VertexId> = g.neighbors(b).collect();
    let c_nbrs: HashSet<VertexId> = g.neighbors(c).collect();
    let nbr_sets = [&a_nbrs, &b_nbrs, &c_nbrs];

    let mut new_edges: Vec<EdgeId> = Vec::new();
    let mut touched: HashSet<VertexId> = [a, b, c].into_iter().collect();
    for i in 0..3 {
        let u = s[i];
        let u_nbrs = nbr_sets[i];
        let w_nbrs = nbr_sets[(i + 1) % 3];
        for &x in w_nbrs.iter() {
            if !u_nbrs.contains(&x) {
                new_edges.push(g.create_edge(u, x));
                touched.insert(x);
            }
        }
    }
    new_edges.push(g.create_edge(a, b));
    new_edges.push(g.create_edge(b, c));

    for x in touched {
        g.recompute_degree(x);
    }

    g.changes.push(Modification::Deg3 { v, a, b, c, new_edges });
    true
}

/// Tries every live degree-3 vertex once, to fixpoint. Returns whether anything
/// changed.
pub(crate) fn deg3_rule(g: &mut Graph, cfg: &Deg3Config) -> bool {
    let mut ran = false;
    loop {
        let candidates: Vec<VertexId> = g.deg_buckets[3].as_slice().to_vec();
        let mut fired = false;
        for v in candidates {
            if g.degree(v) == 3 && try_deg3(g, v, cfg) {
                fired = true;
                ran = true;
            }
        }
        if !fired {
            break;
        }
    }
    ran
}
