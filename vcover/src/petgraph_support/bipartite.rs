// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hopcroft-Karp maximum matching and the König minimum vertex cover it implies, run
//! over the *bipartite double cover* of a [`Graph`]: two copies (left and right) of
//! every live vertex, with an edge `left(a)-right(b)` and `left(b)-right(a)` for every
//! edge `{a, b}` of the graph.
//!
//! The double cover's minimum vertex cover gives a half-integral LP relaxation of the
//! ordinary (non-bipartite) vertex cover problem on the original graph -- this is the
//! basis of the LP lower bound in `bounds::lp`.

use crate::graph::{Graph, VertexId};
use std::collections::VecDeque;

/// Hopcroft-Karp matcher state, reusable across calls by re-running [`Matcher::solve`].
#[derive(Debug, Default)]
pub(crate) struct Matcher {
    /// For a left copy, the right copy it's matched to.
    pair_u: Vec<Option<VertexId>>,
    /// For a right copy, the left copy it's matched to.
    pair_v: Vec<Option<VertexId>>,
    dist: Vec<Option<u32>>,
    /// Set for right copies reachable by an alternating path from some exposed left
    /// vertex, as of the final (failing) BFS phase. Used by [`Matcher::konig_cover`].
    alternating: Vec<bool>,
    queue: VecDeque<VertexId>,
    free_dist: Option<u32>,
}

struct Frame {
    u: VertexId,
    nbrs: Vec<VertexId>,
    idx: usize,
}

impl Matcher {
    fn reset(&mut self, n: usize) {
        self.pair_u.clear();
        self.pair_u.resize(n, None);
        self.pair_v.clear();
        self.pair_v.resize(n, None);
        self.dist.clear();
        self.dist.resize(n, None);
        self.alternating.clear();
        self.alternating.resize(n, false);
    }

    /// Computes a maximum matching of `g`'s double cover, returning its size. Also
    /// leaves [`Matcher::konig_cover`] ready to call.
    pub fn solve(&mut self, g: &Graph) -> usize {
        self.reset(g.vertices_len());
        let mut matching = 0;
        while self.bfs(g) {
            for &u in g.live_vertices() {
                if self.pair_u[u.0 as usize].is_none() && self.dfs(g, u) {
                    matching += 1;
                }
            }
        }
        matching
    }

    fn bfs(&mut self, g: &Graph) -> bool {
        self.queue.clear();
        self.free_dist = None;
        for &u in g.live_vertices() {
            let ui = u.0 as usize;
            self.alternating[ui] = false;
            if self.pair_u[ui].is_none() {
                self.dist[ui] = Some(0);
                self.queue.push_back(u);
            } else {
                self.dist[ui] = None;
            }
        }

        while let Some(u) = self.queue.pop_front() {
            let du = match self.dist[u.0 as usize] {
                Some(d) => d,
                None => continue,
            };
            if self.free_dist.is_some() && du >= self.free_dist.unwrap() {
                continue;
            }
            for v in g.neighbors(u) {
                let vi = v.0 as usize;
                if self.pair_u[u.0 as usize] != Some(v) {
                    self.alternating[vi] = true;
                }
                match self.pair_v[vi] {
                    None => {
                        if self.free_dist.is_none() {
                            self.free_dist = Some(du + 1);
                        }
                    }
                    Some(w) => {
                        if self.dist[w.0 as usize].is_none() {
                            self.dist[w.0 as usize] = Some(du + 1);
                            self.queue.push_back(w);
                        }
                    }
                }
            }
        }
        self.free_dist.is_some()
    }

    /// Searches for a single augmenting path starting at the exposed left vertex
    /// `start`, iteratively (the recursion depth of the textbook algorithm is bounded
    /// only by `|V|`, which we'd rather not put on the call stack).
    fn dfs(&mut self, g: &Graph, start: VertexId) -> bool {
        let mut stack = vec![Frame {
            u: start,
            nbrs: g.neighbors(start).collect(),
            idx: 0,
        }];
        let mut child_result: Option<bool> = None;

        loop {
            if let Some(result) = child_result.take() {
                let frame = stack.last().expect("frame awaiting child result");
                let v = frame.nbrs[frame.idx - 1];
                if result {
                    let u = frame.u;
                    self.pair_v[v.0 as usize] = Some(u);
                    self.pair_u[u.0 as usize] = Some(v);
                    stack.pop();
                    if stack.is_empty() {
                        return true;
                    }
                    child_result = Some(true);
                    continue;
                }
            }

            let frame = stack.last_mut().expect("frame stack non-empty");
            if frame.idx >= frame.nbrs.len() {
                self.dist[frame.u.0 as usize] = None;
                stack.pop();
                if stack.is_empty() {
                    return false;
                }
                child_result = Some(false);
                continue;
            }
            let v = frame.nbrs[frame.idx];
            frame.idx += 1;
            let u = frame.u;
            let du = self.dist[u.0 as usize];

            match self.pair_v[v.0 as usize] {
                None => {
                    if du.map(|d| d + 1) == self.free_dist {
                        self.pair_v[v.0 as usize] = Some(u);
                        self.pair_u[u.0 as usize] = Some(v);
                        stack.pop();
                        if stack.is_empty() {
                            return true;
                        }
                        child_result = Some(true);
                    }
                }
                Some(w) => {
                    if self.dist[w.0 as usize] == du.map(|d| d + 1) {
                        stack.push(Frame {
                            u: w,
                            nbrs: g.neighbors(w).collect(),
                            idx: 0,
                        });
                    }
                }
            }
        }
    }

    /// The left copy currently matched to `v`'s right copy, if any.
    pub(crate) fn matched_left(&self, v: VertexId) -> Option<VertexId> {
        self.pair_v[v.0 as usize]
    }

    /// König's construction: given the maximum matching just computed, returns
    /// `(left_cover, right_cover)` boolean vectors over the double cover's two copies
    /// of each live vertex. A live vertex `v` contributes 1 to the LP relaxation if
    /// both are set, ½ if exactly one is set, 0 if neither is.
    pub fn konig_cover(&self, g: &Graph) -> (Vec<bool>, Vec<bool>) {
        let n = self.pair_u.len();
        let mut left = vec![false; n];
        let mut right = vec![false; n];
        for &v in g.live_vertices() {
            let vi = v.0 as usize;
            if self.alternating[vi] {
                right[vi] = true;
            } else if let Some(p) = self.pair_v[vi] {
                left[p.0 as usize] = true;
            }
        }
        (left, right)
    }
}
