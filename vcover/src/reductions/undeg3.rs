// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The "undeg-3" gadget reduction (`spec.md` §4.6): for a vertex `b` with two
//! non-adjacent neighbors `a` and `c` sharing enough external neighbors, replaces the
//! `a-b`/`b-c` edges and some of those shared neighbors' edges with a new degree-3
//! gadget vertex adjacent to `a`, `b`, `c`.

use crate::graph::{EdgeId, Graph, Modification, VertexId};
use std::collections::HashSet;

/// Counts how many vertices external to `{a, b, c}` are adjacent to exactly two of
/// them ("twos") or all three ("threes"), returning `None` if any external vertex is
/// adjacent to exactly one -- such a vertex would end up with no valid edge to drop.
fn count(g: &Graph, a: VertexId, b: VertexId, c: VertexId) -> Option<usize> {
    let core: HashSet<VertexId> = [a, b, c].into_iter().collect();
    let a_nbrs: HashSet<VertexId> = g.neighbors(a).collect();
    let b_nbrs: HashSet<VertexId> = g.neighbors(b).collect();
    let c_nbrs: HashSet<VertexId> = g.neighbors(c).collect();

    let mut external: HashSet<VertexId> = HashSet::new();
    external.extend(a_nbrs.iter().filter(|x| !core.contains(x)));
    external.extend(b_nbrs.iter().filter(|x| !core.contains(x)));
    external.extend(c_nbrs.iter().filter(|x| !core.contains(x)));

    let mut twos = 0usize;
    let mut threes = 0usize;
    for &u in &external {
        let n = [a_nbrs.contains(&u), b_nbrs.contains(&u), c_nbrs.contains(&u)]
            .iter()
            .filter(|&&m| m)
            .count();
        match n {
            1 => return None,
            2 => twos += 1,
            3 => threes += 1,
            _ => {}
        }
    }
    Some(twos / 2 + threes / 3)
}

/// Searches all unordered pairs of `b`'s non-adjacent neighbors for the pair `(a, c)`
/// maximizing [`count`], among those scoring at least 2.
fn best_pair(g: &Graph, b: VertexId) -> Option<(VertexId, VertexId, usize)> {
    let nbrs: Vec<VertexId> = g.neighbors(b).collect();
    let mut best: Option<(VertexId, VertexId, usize)> = None;

    for i in 0..nbrs.len() {
        for j in (i + 1)..nbrs.len() {
            let (a, c) = (nbrs[i], nbrs[j]);
            if g.edge_between(a, c).is_some() {
                continue;
            }
            let Some(n) = count(g, a, b, c) else { continue };
            if n < 2 {
                continue;
            }
            if best.map_or(true, |(_, _, best_n)| n > best_n) {
                best = Some((a, c, n));
            }
        }
    }
    best
}

/// Applies the gadget given a chosen `(a, b, c)` triple: creates a new vertex adjacent
/// to all three, drops the `a-b` and `b-c` edges, and for every external vertex
/// adjacent to at least two of `{a, b, c}` drops its edge to whichever of the three it
/// is *not* adjacent to (or to `b`, if it is adjacent to all three).
fn apply(g: &mut Graph, a: VertexId, b: VertexId, c: VertexId) {
    let core: HashSet<VertexId> = [a, b, c].into_iter().collect();
    let a_nbrs: HashSet<VertexId> = g.neighbors(a).collect();
    let b_nbrs: HashSet<VertexId> = g.neighbors(b).collect();
    let c_nbrs: HashSet<VertexId> = g.neighbors(c).collect();

    let mut external: HashSet<VertexId> = HashSet::new();
    external.extend(a_nbrs.iter().filter(|x| !core.contains(x)));
    external.extend(b_nbrs.iter().filter(|x| !core.contains(x)));
    external.extend(c_nbrs.iter().filter(|x| !core.contains(x)));

    let mut to_delete: Vec<(VertexId, VertexId)> = Vec::new();
    for &u in &external {
        let found = [a_nbrs.contains(&u), b_nbrs.contains(&u), c_nbrs.contains(&u)];
        let n = found.iter().filter(|&&m| m).count();
        if n < 2 {
            continue;
        }
        let x = if n == 3 {
            b
        } else if !found[0] {
            a
        } else if !found[1] {
            b
        } else {
            c
        };
        to_delete.push((u, x));
    }

    let mut deleted_edges: Vec<(EdgeId, VertexId, VertexId)> = Vec::new();
    let mut touched: HashSet<VertexId> = HashSet::new();
    for (u, x) in to_delete {
        if let Some(e) = g.edge_between(u, x) {
            g.destroy_edge(e);
            deleted_edges.push((e, u, x));
            touched.insert(u);
            touched.insert(x);
        }
    }
    if let Some(e) = g.edge_between(a, b) {
        g.destroy_edge(e);
        deleted_edges.push((e, a, b));
    }
    if let Some(e) = g.edge_between(b, c) {
        g.destroy_edge(e);
        deleted_edges.push((e, b, c));
    }

    let gadget = g.new_vertex(String::new());
    let mut new_edges = Vec::new();
    new_edges.push(g.create_edge(gadget, a));
    new_edges.push(g.create_edge(gadget, b));
    new_edges.push(g.create_edge(gadget, c));

    g.recompute_degree(gadget);
    g.recompute_degree(a);
    g.recompute_degree(b);
    g.recompute_degree(c);
    for v in touched {
        g.recompute_degree(v);
    }

    g.changes.push(Modification::Undeg3 { v: gadget, a, b, c, new_edges, deleted_edges });
}

/// Tries every live vertex as the gadget's center `b`, to fixpoint. The live vertex
/// list is snapshotted before each pass so that gadget vertices created mid-pass
/// aren't immediately reconsidered as a center in the same pass.
pub(crate) fn undeg3_rule(g: &mut Graph) -> bool {
    let mut ran = false;
    loop {
        let candidates: Vec<VertexId> = g.live_vertices().to_vec();
        let mut fired = false;
        for b in candidates {
            if g.degree(b) < 2 {
                continue;
            }
            if let Some((a, c, _)) = best_pair(g, b) {
                apply(g, a, b, c);
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
