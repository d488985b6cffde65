// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Degree-1 and degree-2 fold reductions (`spec.md` §4.6).

use crate::graph::{Graph, VertexId};

/// Repeatedly forces the neighbor of every degree-1 vertex into the cover, to
/// fixpoint. Returns whether anything changed.
pub(crate) fn deg1_rule(g: &mut Graph) -> bool {
    let mut ran = false;
    while let Some(&v) = g.deg_buckets[1].as_slice().first() {
        let u = g.neighbors(v).next().expect("degree-1 vertex has exactly one neighbor");
        g.add_to_vc(u);
        ran = true;
    }
    ran
}

fn deg2_rule_single(g: &mut Graph, v: VertexId) {
    debug_assert_eq!(g.degree(v), 2);
    let nbrs: Vec<VertexId> = g.neighbors(v).collect();
    let (u, w) = (nbrs[0], nbrs[1]);
    if g.edge_between(u, w).is_some() {
        g.add_to_vc(u);
        g.add_to_vc(w);
    } else {
        g.fold_degree_two(v);
    }
}

/// Repeatedly folds every degree-2 vertex (or, if its two neighbors are already
/// adjacent, forces both into the cover), to fixpoint. Returns whether anything
/// changed.
pub(crate) fn deg2_rule(g: &mut Graph) -> bool {
    let mut ran = false;
    while let Some(&v) = g.deg_buckets[2].as_slice().first() {
        deg2_rule_single(g, v);
        ran = true;
    }
    ran
}

/// The `OPT_DEG_12` combo: alternates degree-1 and degree-2 until a full pass of
/// degree-2 finds nothing left to do. Note that the loop is keyed on the degree-2
/// pass specifically, not on "either rule did something" -- a pass where degree-1
/// fires but degree-2 doesn't still ends the loop, matching the schedule this is
/// ported from.
pub(crate) fn deg12_rule(g: &mut Graph) -> bool {
    let mut ran = false;
    loop {
        let r1 = deg1_rule(g);
        let r2 = deg2_rule(g);
        ran = ran || r1 || r2;
        if !r2 {
            break;
        }
    }
    ran
}
