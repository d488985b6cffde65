// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mirror branching (`spec.md` §4.7): when a branch forces `v` into the cover, any
//! "mirror" of `v` -- a distance-2 vertex `m` such that `N(v) \ N(m)` induces a clique
//! -- can safely be forced into the cover alongside it, without widening the branch.

use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Whether the currently-marked subset of `v`'s neighbors induces a clique, checked
/// by comparing each marked neighbor's marked-neighbor count against the subset size
/// rather than testing every pair directly.
fn marked_neighborhood_is_clique(g: &Graph, v: VertexId) -> bool {
    let size = g.neighbors(v).filter(|&u| g.scratch.marked[u.0 as usize]).count();

    for u in g.neighbors(v) {
        if !g.scratch.marked[u.0 as usize] {
            continue;
        }
        let count = g.neighbors(u).filter(|&a| g.scratch.marked[a.0 as usize]).count();
        if count != size {
            return false;
        }
    }
    true
}

/// Finds every mirror of `v`: a vertex `m` at distance exactly 2 from `v` such that
/// `N(v) \ N(m)` induces a clique.
pub(crate) fn mirrors(g: &mut Graph, v: VertexId) -> Vec<VertexId> {
    let nbrs: Vec<VertexId> = g.neighbors(v).collect();

    g.scratch.marked[v.0 as usize] = true;
    for &u in &nbrs {
        g.scratch.marked[u.0 as usize] = true;
    }

    let mut d2: HashSet<VertexId> = HashSet::new();
    for &u in &nbrs {
        for a in g.neighbors(u) {
            if !g.scratch.marked[a.0 as usize] {
                d2.insert(a);
            }
        }
    }

    let mut found = Vec::new();
    for &m in &d2 {
        let m_nbrs: Vec<VertexId> = g.neighbors(m).collect();
        for &a in &m_nbrs {
            g.scratch.marked[a.0 as usize] = false;
        }

        if marked_neighborhood_is_clique(g, v) {
            found.push(m);
        }

        for &u in &nbrs {
            g.scratch.marked[u.0 as usize] = true;
        }
    }

    for &u in &nbrs {
        g.scratch.marked[u.0 as usize] = false;
    }
    g.scratch.marked[v.0 as usize] = false;

    found
}
