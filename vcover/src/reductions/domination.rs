// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The domination reduction (`spec.md` §4.6): if some neighbor `u` of `v` dominates
//! `v`, i.e. `N[v] subseteq N[u]`, then there is always an optimal cover that takes
//! `u` over `v`, so `u` can be forced into the cover.

use super::degree::deg1_rule;
use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Checks whether any neighbor of `v` dominates it, and if so forces that neighbor
/// into the cover. Returns whether it fired.
fn domination_single(g: &mut Graph, v: VertexId) -> bool {
    let closed_v: HashSet<VertexId> = g.neighbors(v).chain(std::iter::once(v)).collect();
    let target = g.neighbors(v).find(|&u| {
        let closed_u: HashSet<VertexId> = g.neighbors(u).chain(std::iter::once(u)).collect();
        closed_v.is_subset(&closed_u)
    });

    match target {
        Some(u) => {
            g.add_to_vc(u);
            true
        }
        None => false,
    }
}

/// Tries every live vertex once, to fixpoint, following each success with a
/// degree-1 pass since forcing `u` into the cover can strand `v` at degree 0 or
/// expose new degree-1 vertices among `u`'s other neighbors.
pub(crate) fn domination_rule(g: &mut Graph) -> bool {
    let mut ran = false;
    loop {
        let candidates: Vec<VertexId> = g.live_vertices().to_vec();
        let mut fired = false;
        for v in candidates {
            if g.degree(v) > 0 && domination_single(g, v) {
                fired = true;
                ran = true;
                deg1_rule(g);
            }
        }
        if !fired {
            break;
        }
    }
    ran
}
