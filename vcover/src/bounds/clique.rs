// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The greedy clique-cover lower bound (`spec.md` §4.5): partition the live vertices
//! into cliques and sum `|clique| - 1` over each, since any cover must omit at most
//! one vertex per clique.
//!
//! Cliques are tracked as explicit membership lists rather than the source's linked
//! leader-chain: each live vertex either sits in no clique yet, or belongs to one
//! tracked by id. A vertex joins an existing clique only once it's checked adjacent
//! to every current member, which keeps the bound sound even though the bookkeeping
//! is simpler. The bucket-sort-by-degree ordering and the ascend/mixed/shuffle
//! iteration schedule are preserved exactly.

use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Knobs for [`clique_bound`], mirroring the `CLIQUE_BOUND_*` configuration keys.
#[derive(Clone, Debug)]
pub struct CliqueConfig {
    pub iter: u32,
    pub ascend: bool,
    pub mixed: bool,
    pub shuffle_pct: u32,
    pub shuffle_dist: f64,
}

impl Default for CliqueConfig {
    fn default() -> Self {
        CliqueConfig {
            iter: 1,
            ascend: false,
            mixed: false,
            shuffle_pct: 50,
            shuffle_dist: 0.3,
        }
    }
}

/// A tiny deterministic PRNG (xorshift64*), used only to perturb the clique-bound
/// vertex order between iterations. Not cryptographic, and not meant to be.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }
}

/// Degree-bucketed vertex order: buckets `0..30` hold vertices of that exact degree,
/// in insertion order, followed by all remaining vertices sorted by degree.
fn bucket_sort(g: &Graph) -> Vec<VertexId> {
    const BUCKETS: usize = 30;
    let mut buckets: Vec<Vec<VertexId>> = vec![Vec::new(); BUCKETS];
    let mut high_deg = Vec::new();
    for &v in g.live_vertices() {
        let d = g.degree(v);
        if d < BUCKETS {
            buckets[d].push(v);
        } else {
            high_deg.push(v);
        }
    }
    high_deg.sort_by_key(|&v| g.degree(v));

    let mut out = Vec::with_capacity(g.live_vertex_count());
    for bucket in buckets {
        out.extend(bucket);
    }
    out.extend(high_deg);
    out
}

fn shuffle(order: &mut [VertexId], cfg: &CliqueConfig, rng: &mut Lcg) {
    let n = order.len();
    for i in 0..n {
        if rng.next_usize(100) >= cfg.shuffle_pct as usize {
            continue;
        }
        let mut dist = (rng.next_usize(n) as f64 * cfg.shuffle_dist) as isize;
        if rng.next_u64() % 2 == 0 {
            dist = -dist;
        }
        let j = i as isize + dist;
        if j >= 0 && (j as usize) < n {
            order.swap(i, j as usize);
        }
    }
}

/// Runs the greedy clique partition `cfg.iter` times (each time possibly shuffling
/// the vertex order per the ascend/mixed schedule) and returns the best bound found.
pub(crate) fn clique_bound(g: &Graph, cfg: &CliqueConfig, seed: u64) -> usize {
    let n = g.vertices_len();
    if n == 0 {
        return 0;
    }
    let mut order = bucket_sort(g);
    let mut rng = Lcg(seed | 1);
    let mut best = 0usize;

    for iter in 0..cfg.iter {
        if cfg.mixed && iter >= 2 && iter % 2 == 0 {
            shuffle(&mut order, cfg, &mut rng);
        }
        if !cfg.mixed && iter >= 1 {
            shuffle(&mut order, cfg, &mut rng);
        }
        let ascending = (cfg.ascend && !cfg.mixed) || (iter % 2 == 1 && cfg.mixed);

        let visit_order: Vec<VertexId> = if ascending {
            order.clone()
        } else {
            order.iter().rev().copied().collect()
        };

        // `clique_id[v]` is the clique `v` belongs to, once it's joined one.
        // `exposed[v]` stays true until `v` has itself been chosen as the vertex some
        // later vertex extends through; once consumed it can't be re-used as an entry
        // point, though `v` remains a member of its clique.
        let mut clique_id: Vec<Option<usize>> = vec![None; n];
        let mut exposed: Vec<bool> = vec![true; n];
        let mut cliques: Vec<Vec<VertexId>> = Vec::new();

        for &a in &visit_order {
            let nbrs: HashSet<VertexId> = g.neighbors(a).collect();
            let mut best_u: Option<VertexId> = None;
            let mut best_size = 0usize;

            for &u in &nbrs {
                if !exposed[u.0 as usize] {
                    continue;
                }
                let members: &[VertexId] = match clique_id[u.0 as usize] {
                    Some(cid) => &cliques[cid],
                    None => std::slice::from_ref(&u),
                };
                if members.len() > best_size && members.iter().all(|m| nbrs.contains(m)) {
                    best_size = members.len();
                    best_u = Some(u);
                }
            }

            if let Some(u) = best_u {
                exposed[u.0 as usize] = false;
                let cid = match clique_id[u.0 as usize] {
                    Some(cid) => cid,
                    None => {
                        let cid = cliques.len();
                        cliques.push(vec![u]);
                        clique_id[u.0 as usize] = Some(cid);
                        cid
                    }
                };
                cliques[cid].push(a);
                clique_id[a.0 as usize] = Some(cid);
            }
        }

        let bound: usize = cliques.iter().map(|c| c.len() - 1).sum();
        best = best.max(bound);
    }

    best
}
