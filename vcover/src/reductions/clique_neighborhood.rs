// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The clique-neighborhood reduction (`spec.md` §4.6): partitions `v`'s neighborhood
//! into an independent set `C1` and a clique `C2`, and if `|C1| >= |C2|` replaces
//! `v`'s neighborhood with edges from each `C1` member into its unique non-neighbor's
//! neighborhood, then drops `v` and `C2` entirely.

use crate::graph::{EdgeId, Graph, Modification, VertexId};
use std::collections::HashSet;

/// Knobs mirroring the `CN_CHECK1_*`/`CN_CHECK2_*` configuration keys.
#[derive(Clone, Debug)]
pub struct CnConfig {
    pub check1_enabled: bool,
    pub check1_min_deg: usize,
    pub check1_max_deg: usize,
    pub check2_enabled: bool,
    pub check2_cutoff: f64,
    pub check2_relax_n: usize,
    pub check2_large_n: usize,
    pub check2_large_k: usize,
}

impl Default for CnConfig {
    fn default() -> Self {
        CnConfig {
            check1_enabled: true,
            check1_min_deg: 1,
            check1_max_deg: 20,
            check2_enabled: true,
            check2_cutoff: 1000.0,
            check2_relax_n: 12,
            check2_large_n: 20,
            check2_large_k: 3,
        }
    }
}

const E_CONST: f64 = std::f64::consts::E;

/// Cheap necessary condition on `v`'s degree and edge count for a valid partition to
/// exist at all, checked before doing any real work.
fn check1(g: &Graph, v: VertexId, cfg: &CnConfig) -> bool {
    if !cfg.check1_enabled {
        return true;
    }
    let d = g.degree(v);
    if d < cfg.check1_min_deg || d > cfg.check1_max_deg {
        return false;
    }

    let m: usize = g.neighbors(v).map(|a| g.degree(a) - 1).sum();

    let half = (d + 1) / 2;
    let min_c1 = (half * (half - 1)) / 2;
    if m < 2 * min_c1 {
        return false;
    }

    let m_upper = m - min_c1;
    let total_pairs = (d * (d - 1)) / 2;
    let c1_lower = total_pairs.saturating_sub(m_upper);
    let c1_upper = total_pairs; // m_lower == 0
    let c1_upper = if c1_upper >= d { c1_upper } else { d - 1 };

    if c1_lower >= d || 2 * c1_upper < d {
        return false;
    }
    true
}

/// Whether exhaustively searching `C1_candidates` for a `c1_n`-sized valid `C1` is
/// worth attempting, approximating the size of the search space.
fn check2(candidates_len: usize, c1_n: usize, cfg: &CnConfig) -> bool {
    if !cfg.check2_enabled {
        return true;
    }
    let n = candidates_len;
    if n <= cfg.check2_relax_n {
        return true;
    }
    let mut k = if c1_n > n / 2 { n - c1_n } else { c1_n };
    if k == 0 {
        return true;
    }
    if n >= cfg.check2_large_n && k >= cfg.check2_large_k {
        return false;
    }

    let mut x = (E_CONST * n as f64) / (k as f64);
    while k > 0 {
        if x > cfg.check2_cutoff {
            return false;
        }
        x *= x;
        k -= 1;
    }
    true
}

/// For each neighbor `a` of `v`, its unique non-neighbor within `N(v)` (if there is
/// exactly one), as a `(a, non_neighbor)` candidate pair for `C1`.
fn find_candidates(g: &Graph, v: VertexId) -> Vec<(VertexId, VertexId)> {
    let v_nbrs: Vec<VertexId> = g.neighbors(v).collect();
    let mut out = Vec::new();
    for &a in &v_nbrs {
        let a_closed: HashSet<VertexId> = g.neighbors(a).chain(std::iter::once(a)).collect();
        let mut nn = None;
        for &b in &v_nbrs {
            if !a_closed.contains(&b) {
                if nn.is_some() {
                    nn = None;
                    break;
                }
                nn = Some(b);
            }
        }
        if let Some(nn) = nn {
            out.push((a, nn));
        }
    }
    out
}

/// Backtracks over `candidates[pos..]` for a size-`size` subset usable as `C1`: no
/// two chosen pairs may have one's member be another's non-neighbor.
fn dfs(
    candidates: &[(VertexId, VertexId)],
    pos: usize,
    size: usize,
    chosen: &mut Vec<(VertexId, VertexId)>,
    in_c1: &mut HashSet<VertexId>,
) -> bool {
    if chosen.len() == size {
        return true;
    }
    let remaining = size - chosen.len();
    for i in pos..candidates.len() {
        if candidates.len() - i < remaining {
            return false;
        }
        let (a, nn) = candidates[i];
        if in_c1.contains(&nn) {
            continue;
        }
        chosen.push((a, nn));
        in_c1.insert(a);
        if dfs(candidates, i + 1, size, chosen, in_c1) {
            return true;
        }
        chosen.pop();
        in_c1.remove(&a);
    }
    false
}

/// Finds a valid `(C1, C2)` partition of `N(v)`, if one exists and is cheap enough to
/// search for.
fn find_partition(
    g: &Graph,
    v: VertexId,
    cfg: &CnConfig,
) -> Option<(Vec<(VertexId, VertexId)>, Vec<VertexId>)> {
    let v_nbrs: HashSet<VertexId> = g.neighbors(v).collect();
    let mut m = 0usize;
    for &a in &v_nbrs {
        m += g.neighbors(a).filter(|b| v_nbrs.contains(b)).count();
    }
    debug_assert_eq!(m % 2, 0);
    let m = m / 2;

    let d = g.degree(v);
    let total_pairs = (d * (d - 1)) / 2;
    if total_pairs < m {
        return None;
    }
    let c1_n = total_pairs - m;
    if c1_n >= d || 2 * c1_n < d {
        return None;
    }

    let candidates = find_candidates(g, v);
    if candidates.len() < c1_n {
        return None;
    }
    if !check2(candidates.len(), c1_n, cfg) {
        return None;
    }

    let mut chosen = Vec::new();
    let mut in_c1 = HashSet::new();
    if !dfs(&candidates, 0, c1_n, &mut chosen, &mut in_c1) {
        return None;
    }

    let c2: Vec<VertexId> = v_nbrs.iter().copied().filter(|a| !in_c1.contains(a)).collect();
    Some((chosen, c2))
}

/// Applies the reduction to `v` if a valid clique-neighborhood partition exists.
/// Returns whether it fired.
pub(crate) fn try_clique_neighborhood(g: &mut Graph, v: VertexId, cfg: &CnConfig) -> bool {
    if !check1(g, v, cfg) {
        return false;
    }
    let (c1, c2) = match find_partition(g, v, cfg) {
        Some(p) => p,
        None => return false,
    };

    let mut new_edges: Vec<EdgeId> = Vec::new();
    let mut touched: HashSet<VertexId> = HashSet::new();
    for &(a, nn) in &c1 {
        let a_nbrs: HashSet<VertexId> = g.neighbors(a).collect();
        let nn_nbrs: Vec<VertexId> = g.neighbors(nn).collect();
        for c in nn_nbrs {
            if !a_nbrs.contains(&c) {
                new_edges.push(g.create_edge(a, c));
                touched.insert(a);
                touched.insert(c);
            }
        }
    }
    for v in &touched {
        g.recompute_degree(*v);
    }

    g.delete_vertex(v);
    for &b in &c2 {
        g.delete_vertex(b);
    }

    g.changes.push(Modification::CliqueNeigh { v, c1, c2, new_edges });
    true
}

/// Tries every live vertex once, to fixpoint. Returns whether anything changed.
pub(crate) fn clique_neighborhood_rule(g: &mut Graph, cfg: &CnConfig) -> bool {
    let mut ran = false;
    loop {
        let candidates: Vec<VertexId> = g.live_vertices().to_vec();
        let mut fired = false;
        for v in candidates {
            if g.degree(v) > 0 && try_clique_neighborhood(g, v, cfg) {
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
