// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The LP relaxation lower bound (`spec.md` §4.4): a half-integral solution derived
//! from the bipartite double-cover's König cover, crown-reduced and then tightened by
//! finding closed strongly-connected components of the associated flow graph.

use crate::graph::{Graph, VertexId};
use crate::petgraph_support::bipartite::Matcher;
use crate::petgraph_support::scc::Sccs;
use petgraph::graph::{DiGraph, NodeIndex};

/// Computes the LP lower bound for the live portion of `g`, mutating `g` in place:
/// vertices the bound proves are never needed are deleted, and vertices the bound
/// proves are always needed are added to the cover (increasing the caller's notion of
/// `size`, not the returned bound). Returns 0 without touching `g` if the feasibility
/// gate `sqrt(|V|) * |E| <= cutoff` fails.
pub(crate) fn lp_bound(g: &mut Graph, cutoff: f64) -> usize {
    let n = g.live_vertex_count();
    if n == 0 {
        return 0;
    }
    let m = g.uncovered_edge_count();
    if (n as f64).sqrt() * (m as f64) > cutoff {
        return 0;
    }

    let mut matcher = Matcher::default();
    matcher.solve(g);
    let (left, right) = matcher.konig_cover(g);

    let mut halves: Vec<VertexId> = Vec::new();
    let mut ones: Vec<VertexId> = Vec::new();
    let mut zeros: Vec<VertexId> = Vec::new();
    for &v in g.live_vertices() {
        let vi = v.0 as usize;
        match (left[vi], right[vi]) {
            (true, true) => ones.push(v),
            (false, false) => zeros.push(v),
            _ => halves.push(v),
        }
    }

    for v in zeros {
        if g.degree(v) > 0 {
            g.delete_vertex(v);
        }
    }
    for v in ones {
        if g.degree(v) > 0 {
            g.add_to_vc(v);
        }
    }

    loop {
        let resolved = tighten_once(g, &matcher, &halves);
        halves.retain(|&v| g.degree(v) > 0 && !resolved.contains(&v));
        if resolved.is_empty() {
            break;
        }
    }

    (halves.len() + 1) / 2
}

/// One round of SCC-based tightening over the flow graph induced by `halves` and the
/// matching `matcher` computed earlier. Returns the vertices resolved this round
/// (either deleted or forced into the cover).
fn tighten_once(g: &mut Graph, matcher: &Matcher, halves: &[VertexId]) -> Vec<VertexId> {
    let live: Vec<VertexId> = halves.iter().copied().filter(|&v| g.degree(v) > 0).collect();
    if live.is_empty() {
        return Vec::new();
    }

    let left_node = |v: VertexId| NodeIndex::<u32>::new(2 * v.0 as usize);
    let right_node = |v: VertexId| NodeIndex::<u32>::new(2 * v.0 as usize + 1);

    let node_count = 2 * g.vertices_len();
    let mut flow: DiGraph<(), (), u32> = DiGraph::with_capacity(node_count, node_count);
    for _ in 0..node_count {
        flow.add_node(());
    }

    let live_set: std::collections::HashSet<VertexId> = live.iter().copied().collect();
    for &v in &live {
        for u in g.neighbors(v) {
            if live_set.contains(&u) {
                flow.add_edge(left_node(v), right_node(u), ());
            }
        }
        if let Some(p) = matcher.matched_left(v) {
            if live_set.contains(&p) {
                flow.add_edge(right_node(v), left_node(p), ());
            }
        }
    }

    let sccs = Sccs::new(&flow);
    let mut resolved = Vec::new();
    for scc in sccs.sccs() {
        if scc.len() < 2 {
            continue;
        }
        let mut sides: std::collections::HashMap<u32, bool> = std::collections::HashMap::new();
        let mut mixed = false;
        for &node in scc {
            let idx = node.index() as u32;
            let raw = idx / 2;
            let side = idx % 2 == 1;
            if let Some(&existing) = sides.get(&raw) {
                if existing != side {
                    mixed = true;
                    break;
                }
            } else {
                sides.insert(raw, side);
            }
        }
        if mixed {
            continue;
        }

        let member_set: std::collections::HashSet<NodeIndex<u32>> = scc.iter().copied().collect();
        let closed = scc.iter().all(|&node| {
            flow.neighbors(node).all(|nbr| member_set.contains(&nbr))
        });
        if !closed {
            continue;
        }

        for (&raw, &is_right) in &sides {
            let v = VertexId(raw);
            if g.degree(v) == 0 {
                continue;
            }
            if is_right {
                g.add_to_vc(v);
            } else {
                g.delete_vertex(v);
            }
            resolved.push(v);
        }
    }
    resolved
}
