// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The branch-and-bound search (`spec.md` §4.7): at each node, tighten lower bounds,
//! split into independent components where possible, then branch on the
//! highest-degree vertex by trying both "it's in the cover" and "all its neighbors
//! are" until the live graph is exhausted or the bound proves the branch can't beat
//! the best solution found so far.

use crate::bounds::{clique, lp};
use crate::config::{Config, Rule};
use crate::graph::{Graph, Modification, VertexId};
use crate::mirror;
use crate::reductions::{clique_neighborhood, deg3, degree, domination, unconfined, undeg3};
use log::{debug, info, trace};
use std::collections::HashSet;

/// Runs one reduction rule by name.
fn execute_rule(g: &mut Graph, rule: Rule, cfg: &Config) {
    match rule {
        Rule::None => {}
        Rule::Deg1 => {
            degree::deg1_rule(g);
        }
        Rule::Deg2 => {
            degree::deg2_rule(g);
        }
        Rule::Deg3 => {
            deg3::deg3_rule(g, &cfg.deg3);
        }
        Rule::Domination => {
            domination::domination_rule(g);
        }
        Rule::Unconfined => {
            unconfined::unconfined_rule(g, &cfg.unconfined);
        }
        Rule::CliqueNeighborhood => {
            clique_neighborhood::clique_neighborhood_rule(g, &cfg.cn);
        }
        Rule::Lp => {
            lp::lp_bound(g, cfg.lp_bound_cutoff);
        }
        Rule::Deg12 => {
            degree::deg12_rule(g);
        }
        Rule::UnconfinedCombo => {
            unconfined::unconfined_rule_combo(g, &cfg.unconfined);
        }
        Rule::Undeg3 => {
            undeg3::undeg3_rule(g);
        }
    }
}

/// Runs the configured per-node rule schedule once.
fn optimize(g: &mut Graph, cfg: &Config) {
    for &rule in &cfg.enabled_rules {
        execute_rule(g, rule, cfg);
    }
}

/// The fixed pre-branching schedule: twelve rule slots repeated 50 times. Unlike
/// [`optimize`], this sequence isn't configurable -- it runs once, before the search
/// starts, to shrink the graph as much as cheaply possible.
fn preoptimize(g: &mut Graph, cfg: &Config) {
    for _ in 0..50 {
        execute_rule(g, Rule::Deg12, cfg);
        execute_rule(g, Rule::UnconfinedCombo, cfg);
        execute_rule(g, Rule::Lp, cfg);
        execute_rule(g, Rule::CliqueNeighborhood, cfg);
        execute_rule(g, Rule::Lp, cfg);
        execute_rule(g, Rule::Deg3, cfg);

        execute_rule(g, Rule::Deg12, cfg);
        execute_rule(g, Rule::UnconfinedCombo, cfg);
        execute_rule(g, Rule::Lp, cfg);
        execute_rule(g, Rule::CliqueNeighborhood, cfg);
        execute_rule(g, Rule::Lp, cfg);
        execute_rule(g, Rule::Undeg3, cfg);
    }
}

/// Implicit cover credit recorded since `mark` (an earlier length of `g.changes`).
/// Each degree-2 fold guarantees exactly one more vertex will eventually enter the
/// cover once its merged placeholder is resolved (`graph/snapshot.rs`'s `VertexMerge`
/// translation adds a net +1 either way), and each clique-neighborhood firing deletes
/// `v` and all of `C2` without ever pushing them to `vc_v`, so its translation adds
/// exactly `|C2|` on readback. Deg3/Undeg3 gadgets contribute 0: their translation
/// redistributes existing membership rather than adding net vertices. The branch
/// driver uses this total as a credit against the vertex count it has explicitly
/// forced so far.
fn folds_since(g: &Graph, mark: usize) -> i64 {
    g.changes[mark..]
        .iter()
        .map(|m| match m {
            Modification::VertexMerge { .. } => 1,
            Modification::CliqueNeigh { c2, .. } => c2.len() as i64,
            _ => 0,
        })
        .sum()
}

/// Records a new best solution if `size` beats the current bound `u`.
fn write_best_sol(g: &Graph, size: i64, u: &mut i64, best: &mut Vec<VertexId>) {
    if size < *u {
        *u = size;
        *best = g.read_vc();
        debug_assert_eq!(best.len() as i64, *u);
    }
}

/// Connected components of the live graph, as vertex lists.
fn connected_components(g: &Graph) -> Vec<Vec<VertexId>> {
    let mut seen: HashSet<VertexId> = HashSet::new();
    let mut comps = Vec::new();

    for &start in g.live_vertices() {
        if seen.contains(&start) {
            continue;
        }
        let mut comp = Vec::new();
        let mut stack = vec![start];
        seen.insert(start);
        while let Some(v) = stack.pop() {
            comp.push(v);
            for u in g.neighbors(v) {
                if seen.insert(u) {
                    stack.push(u);
                }
            }
        }
        comps.push(comp);
    }
    comps
}

/// Solves one connected component as an independent subproblem: builds a fresh graph
/// isomorphic to the component (vertices named by their original index, so the
/// solution can be mapped back), and runs the same branch-and-bound search on it from
/// scratch. Returns `None` if no cover within `budget` vertices exists.
fn solve_component(
    orig: &Graph,
    comp: &[VertexId],
    cfg: &Config,
    budget: i64,
) -> Option<(Vec<VertexId>, u64)> {
    if budget <= 0 {
        return None;
    }

    let comp_set: HashSet<VertexId> = comp.iter().copied().collect();
    let mut seen_edges: HashSet<(VertexId, VertexId)> = HashSet::new();
    let mut edges = Vec::new();
    for &v in comp {
        for u in orig.neighbors(v) {
            if !comp_set.contains(&u) {
                continue;
            }
            let key = if v.0 < u.0 { (v, u) } else { (u, v) };
            if seen_edges.insert(key) {
                edges.push((v.0.to_string(), u.0.to_string()));
            }
        }
    }

    let mut sub = Graph::from_edges(edges);
    let mut u = budget;
    let mut best = Vec::new();
    let size = sub.vc_v.len() as i64;
    branch(&mut sub, cfg, size, &mut u, &mut best);

    if best.is_empty() {
        None
    } else {
        let mapped = best
            .iter()
            .map(|&sv| {
                let idx: u32 = sub.name(sv).parse().expect("component vertex named by original index");
                VertexId(idx)
            })
            .collect();
        Some((mapped, sub.recursive_steps))
    }
}

/// Solves every component independently and, if all of them succeed within the
/// remaining budget, combines their solutions into a single candidate and records it
/// if it improves on `u`.
fn branch_split(
    g: &mut Graph,
    comps: &[Vec<VertexId>],
    cfg: &Config,
    size: i64,
    u: &mut i64,
    best: &mut Vec<VertexId>,
) {
    let old_vc_len = g.vc_v.len();
    let mut total_size = size;
    let mut found = true;

    for comp in comps {
        let budget = *u - total_size;
        match solve_component(g, comp, cfg, budget) {
            Some((sol, steps)) => {
                total_size += sol.len() as i64;
                g.vc_v.extend(sol);
                g.recursive_steps += steps;
            }
            None => {
                found = false;
                break;
            }
        }
    }

    if found && total_size < *u {
        write_best_sol(g, total_size, u, best);
    }
    g.vc_v.truncate(old_vc_len);
}

/// One node of the branch-and-bound search.
fn branch(g: &mut Graph, cfg: &Config, size: i64, u: &mut i64, best: &mut Vec<VertexId>) {
    if g.live_vertex_count() == 0 {
        write_best_sol(g, size, u, best);
        return;
    }

    g.recursive_steps += 1;
    let pre_snapshot = g.create_snapshot();

    let mut lower_bound: i64 = 1;
    let vc_before = g.vc_v.len();
    if cfg.lp_bound {
        lower_bound = lower_bound.max(lp::lp_bound(g, cfg.lp_bound_cutoff) as i64);
    }
    let size = size + (g.vc_v.len() as i64 - vc_before as i64);

    if g.live_vertex_count() == 0 {
        write_best_sol(g, size, u, best);
        g.restore_snapshot(pre_snapshot);
        return;
    }

    if cfg.clique_bound {
        lower_bound = lower_bound.max(clique::clique_bound(g, &cfg.clique, g.recursive_steps) as i64);
    }

    if size + lower_bound >= *u {
        trace!(
            "pruning at step {}: size {} + bound {} >= best {}",
            g.recursive_steps, size, lower_bound, *u
        );
        g.restore_snapshot(pre_snapshot);
        return;
    }

    if cfg.components {
        let comps = connected_components(g);
        if comps.len() >= 2 {
            debug!("splitting into {} components at step {}", comps.len(), g.recursive_steps);
            branch_split(g, &comps, cfg, size, u, best);
            g.restore_snapshot(pre_snapshot);
            return;
        }
    }

    let mut v = g.live_vertices()[0];
    let mut m: i64 = 0;
    for &a in g.live_vertices() {
        m += g.degree(a) as i64;
        if g.degree(a) > g.degree(v) {
            v = a;
        }
    }
    m /= 2;

    let fake_k = *u - size;
    if g.degree(v) as i64 <= fake_k {
        let n = g.live_vertex_count() as i64;
        if n > fake_k * fake_k + fake_k || m > fake_k * fake_k {
            g.restore_snapshot(pre_snapshot);
            return;
        }
    }

    for i in 0..2 {
        let snapshot = g.create_snapshot();
        let old_vc = g.vc_v.len();
        let mark = g.changes.len();

        if i == 0 {
            if cfg.mirror {
                for m in mirror::mirrors(g, v) {
                    g.add_to_vc(m);
                }
            }
            g.add_to_vc(v);
        } else {
            while g.degree(v) > 0 {
                let w = g.neighbors(v).next().expect("positive degree implies a neighbor");
                g.add_to_vc(w);
            }
        }

        optimize(g, cfg);

        let folds = folds_since(g, mark);
        let vc_diff = g.vc_v.len() as i64 - old_vc as i64 + folds;
        branch(g, cfg, size + vc_diff, u, best);

        g.restore_snapshot(snapshot);
    }

    g.restore_snapshot(pre_snapshot);
}

/// Solves `g` for a minimum vertex cover, returning its vertices. `g` is left exactly
/// as it was passed in: every reduction and branch is undone via its snapshot before
/// this returns.
pub fn solve(g: &mut Graph, cfg: &Config) -> Vec<VertexId> {
    let pre_snapshot = g.create_snapshot();
    let mut u: i64 = g.vertices_len() as i64;

    let mark = g.changes.len();
    preoptimize(g, cfg);
    let folds = folds_since(g, mark);
    let size = g.vc_v.len() as i64 + folds;
    debug!("preoptimize forced {} vertices, {} live remain", size, g.live_vertex_count());

    let mut best = Vec::new();
    branch(g, cfg, size, &mut u, &mut best);
    info!(
        "solved in {} recursive steps, cover size {}",
        g.recursive_steps, best.len()
    );

    g.restore_snapshot(pre_snapshot);
    best
}
