// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unconfined-vertex reduction (`spec.md` §4.6): grows a witness set `S` starting
//! from `{v}` and, if it can be grown only in ways that never shrink `N(S)`'s
//! boundary to nothing, concludes `v` is unconfined and forces it into the cover.

use super::degree::{deg1_rule, deg2_rule};
use crate::graph::{Graph, VertexId, VertexKind};
use std::collections::HashSet;

/// Knobs mirroring `UNCONF_MAX_DEG`/`UNCONF_CUTOFF`.
#[derive(Clone, Copy, Debug)]
pub struct UnconfinedConfig {
    pub max_deg: usize,
    pub cutoff: usize,
}

impl Default for UnconfinedConfig {
    fn default() -> Self {
        UnconfinedConfig { max_deg: 5000, cutoff: 50000 }
    }
}

/// Closed neighborhood of a vertex set.
fn closed_neighborhood(g: &Graph, s: &HashSet<VertexId>) -> HashSet<VertexId> {
    let mut out = s.clone();
    for &v in s {
        out.extend(g.neighbors(v));
    }
    out
}

/// Whether `v` is unconfined: repeatedly looks for `u` in `N(S)` with exactly one
/// neighbor in `S` and minimal `|N(u) \ N[S]|`. A minimum of 0 means `v` is
/// unconfined; a minimum of 1 grows `S` by that vertex and continues; anything else
/// stops the search with `v` not unconfined.
fn is_unconfined(g: &Graph, v: VertexId, cfg: &UnconfinedConfig) -> bool {
    let mut s: HashSet<VertexId> = [v].into_iter().collect();
    let mut work = 0usize;

    loop {
        let closed_s = closed_neighborhood(g, &s);
        let boundary: HashSet<VertexId> =
            s.iter().flat_map(|&u| g.neighbors(u)).filter(|u| !s.contains(u)).collect();

        let mut best_count = usize::MAX;
        let mut best_u = None;

        for &u in &boundary {
            if g.degree(u) > cfg.max_deg {
                continue;
            }
            work += g.degree(u);
            if work > cfg.cutoff {
                return false;
            }

            let in_s = g.neighbors(u).filter(|x| s.contains(x)).count();
            if in_s != 1 {
                continue;
            }
            let outside = g.neighbors(u).filter(|x| !closed_s.contains(x)).count();
            if outside < best_count {
                best_count = outside;
                best_u = Some(u);
            }
        }

        match best_count {
            0 => return true,
            1 => {
                s.insert(best_u.expect("best_count==1 implies a witness vertex"));
            }
            _ => return false,
        }
    }
}

/// Tries every live vertex once, to fixpoint. Each success is followed by a
/// degree-1 pass, since forcing `v` into the cover can strand a neighbor at degree 1.
pub(crate) fn unconfined_rule(g: &mut Graph, cfg: &UnconfinedConfig) -> bool {
    let mut ran = false;
    loop {
        let candidates: Vec<VertexId> = g.live_vertices().to_vec();
        let mut fired = false;
        for v in candidates {
            if g.degree(v) == 0 {
                continue;
            }
            if is_unconfined(g, v, cfg) {
                g.add_to_vc(v);
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

/// The combo variant: skips vertices produced by the degree-2 fold (merging can
/// invalidate the witness-set growth this check relies on), and follows each success
/// with both degree-1 and degree-2 passes rather than just degree-1.
pub(crate) fn unconfined_rule_combo(g: &mut Graph, cfg: &UnconfinedConfig) -> bool {
    let mut ran = false;
    loop {
        let candidates: Vec<VertexId> = g.live_vertices().to_vec();
        let mut fired = false;
        for v in candidates {
            if g.degree(v) == 0 {
                continue;
            }
            if matches!(g.vertex(v).kind, VertexKind::Merged { .. }) {
                continue;
            }
            if is_unconfined(g, v, cfg) {
                g.add_to_vc(v);
                fired = true;
                ran = true;
                deg1_rule(g);
                deg2_rule(g);
            }
        }
        if !fired {
            break;
        }
    }
    ran
}
