// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reversible modification log: every structural change the reduction rules and
//! the branch driver make is recorded here so it can be undone in reverse, and later
//! replayed forward to translate a cover of the kernelized graph back to a cover of
//! the original one.

use super::{EdgeId, Graph, VertexId};

/// A single structural change to a [`Graph`], undoable and (for reduction-rule
/// changes) translatable.
///
/// Variants correspond one-to-one with the reduction rules of `spec.md` §4.6 plus the
/// base edge-covering operation; dispatch is by `match` rather than a trait object,
/// since the set of variants is closed and known at compile time.
#[derive(Debug)]
pub enum Modification {
    /// One or more edges covered by the same `delete_vertex`/`add_to_vc` call (or by
    /// consecutive such calls, coalesced). Carries no semantic content for
    /// [`Graph::read_vc`] beyond restoring graph structure on undo.
    EdgeDeletion(Vec<EdgeId>),
    /// The degree-2 fold: `v`'s two neighbors `u` and `w` were merged into `merged`.
    VertexMerge {
        merged: VertexId,
        u: VertexId,
        v: VertexId,
        w: VertexId,
        /// `u`'s edges (other than to `v`), rewired onto `merged`.
        u_edges: Vec<EdgeId>,
        /// `w`'s edges (other than to `v`, and other than any absorbed duplicate),
        /// rewired onto `merged`.
        w_edges: Vec<EdgeId>,
        /// Edges from `w` to a neighbor `w` shared with `u`, dropped rather than
        /// turned into a parallel edge on `merged`: `(edge, w, shared neighbor)`.
        absorbed: Vec<(EdgeId, VertexId, VertexId)>,
    },
    /// The degree-3 reduction: a degree-3 vertex `v` with neighbors `a`, `b`, `c` is
    /// replaced by a path gadget `a-b-c` (`new_edges`, in that order).
    Deg3 {
        v: VertexId,
        a: VertexId,
        b: VertexId,
        c: VertexId,
        new_edges: Vec<EdgeId>,
    },
    /// The clique-neighborhood reduction: `v`'s neighborhood splits into a clique
    /// `c1` (each paired with a non-neighbor `c1[i].1` of `v` forced out together with
    /// it) and an independent remainder `c2`, replaced by `new_edges`.
    CliqueNeigh {
        v: VertexId,
        c1: Vec<(VertexId, VertexId)>,
        c2: Vec<VertexId>,
        new_edges: Vec<EdgeId>,
    },
    /// The "undeg-3" gadget reduction: vertex `v` gains a new degree-3 neighbor
    /// adjacent to `a`, `b`, `c`, and the edges among `{a, b, c}`'s neighborhoods that
    /// the gadget displaces are recorded for restoration.
    Undeg3 {
        v: VertexId,
        a: VertexId,
        b: VertexId,
        c: VertexId,
        new_edges: Vec<EdgeId>,
        deleted_edges: Vec<(EdgeId, VertexId, VertexId)>,
    },
}

impl Modification {
    /// Undoes this change in place. Must be called in the reverse of the order the
    /// changes were recorded.
    pub(crate) fn undo(&self, g: &mut Graph) {
        match self {
            Modification::EdgeDeletion(edges) => {
                let mut touched = Vec::new();
                for &e in edges.iter().rev() {
                    let (a, b) = g.endpoints(e);
                    g.uncover_edge(e);
                    touched.push(a);
                    touched.push(b);
                }
                for v in touched {
                    g.recompute_degree(v);
                }
            }
            Modification::VertexMerge {
                merged,
                u,
                w,
                u_edges,
                w_edges,
                absorbed,
                ..
            } => {
                for &e in u_edges.iter().rev() {
                    g.rewire_endpoint(e, *merged, *u);
                }
                for &e in w_edges.iter().rev() {
                    g.rewire_endpoint(e, *merged, *w);
                }
                for &(e, owner, n) in absorbed.iter().rev() {
                    g.restore_edge(e, owner, n);
                }
                g.vert_change_deg(*merged, 0);
                g.recompute_degree(*u);
                g.recompute_degree(*w);
            }
            Modification::Deg3 { new_edges, .. } => {
                for &e in new_edges.iter().rev() {
                    g.destroy_edge(e);
                }
            }
            Modification::CliqueNeigh { new_edges, .. } => {
                for &e in new_edges.iter().rev() {
                    g.destroy_edge(e);
                }
            }
            Modification::Undeg3 {
                new_edges,
                deleted_edges,
                ..
            } => {
                for &e in new_edges.iter().rev() {
                    g.destroy_edge(e);
                }
                for &(e, a, b) in deleted_edges.iter().rev() {
                    g.restore_edge(e, a, b);
                }
            }
        }
    }

    /// Replays this change's effect on a partial cover being translated back to a
    /// cover of the original graph, as part of [`Graph::read_vc`]. `in_cover` is
    /// indexed by the raw vertex index and is mutated in place.
    fn translate_vc(&self, in_cover: &mut [bool]) {
        match self {
            Modification::EdgeDeletion(_) => {}
            Modification::VertexMerge { merged, u, v, w, .. } => {
                if in_cover[merged.0 as usize] {
                    in_cover[u.0 as usize] = true;
                    in_cover[w.0 as usize] = true;
                    in_cover[merged.0 as usize] = false;
                } else {
                    in_cover[v.0 as usize] = true;
                }
            }
            Modification::Deg3 { v, a, b, c, .. } => {
                let num = [*a, *b, *c]
                    .iter()
                    .filter(|x| in_cover[x.0 as usize])
                    .count();
                match num {
                    3 => {}
                    1 => {
                        debug_assert!(in_cover[b.0 as usize]);
                        in_cover[b.0 as usize] = false;
                        in_cover[v.0 as usize] = true;
                    }
                    2 => {
                        if !in_cover[c.0 as usize] {
                            in_cover[a.0 as usize] = false;
                        } else if !in_cover[b.0 as usize] {
                            in_cover[c.0 as usize] = false;
                        } else {
                            in_cover[b.0 as usize] = false;
                        }
                        in_cover[v.0 as usize] = true;
                    }
                    _ => unreachable!("deg3 gadget with no neighbor in cover"),
                }
            }
            Modification::CliqueNeigh { v, c1, c2, .. } => {
                let count = c1
                    .iter()
                    .filter(|(a, _)| in_cover[a.0 as usize])
                    .count();
                if count == c1.len() {
                    for &u in c2 {
                        in_cover[u.0 as usize] = true;
                    }
                } else if count + 1 == c1.len() {
                    let (_, nn) = c1
                        .iter()
                        .find(|(a, _)| !in_cover[a.0 as usize])
                        .copied()
                        .expect("exactly one c1 pair missing from cover");
                    in_cover[v.0 as usize] = true;
                    for &u in c2 {
                        in_cover[u.0 as usize] = true;
                    }
                    in_cover[nn.0 as usize] = false;
                } else {
                    unreachable!("clique-neighborhood gadget with unexpected cover count");
                }
            }
            Modification::Undeg3 { v, a, b, c, .. } => {
                let verts = [*v, *a, *b, *c];
                let num = verts.iter().filter(|x| in_cover[x.0 as usize]).count();
                match num {
                    3 => {
                        if in_cover[v.0 as usize] {
                            in_cover[v.0 as usize] = false;
                            if !in_cover[a.0 as usize] {
                                in_cover[a.0 as usize] = true;
                            } else if !in_cover[b.0 as usize] {
                                in_cover[b.0 as usize] = true;
                            } else {
                                in_cover[c.0 as usize] = true;
                            }
                        }
                    }
                    2 => {
                        debug_assert!(in_cover[v.0 as usize]);
                        in_cover[v.0 as usize] = false;
                        if in_cover[a.0 as usize] {
                            in_cover[c.0 as usize] = true;
                        } else if in_cover[b.0 as usize] {
                            in_cover[a.0 as usize] = true;
                        } else {
                            in_cover[b.0 as usize] = true;
                        }
                    }
                    1 => {
                        debug_assert!(in_cover[v.0 as usize]);
                        in_cover[v.0 as usize] = false;
                        in_cover[b.0 as usize] = true;
                    }
                    _ => unreachable!("undeg-3 gadget with {} of 4 in cover", num),
                }
            }
        }
    }
}

/// A checkpoint of a [`Graph`]'s state, returned by
/// [`Graph::create_snapshot`] and consumed by [`Graph::restore_snapshot`].
///
/// Opaque outside the crate: the branch driver threads these through recursive calls
/// without inspecting them.
#[derive(Debug)]
pub struct Snapshot {
    vc_v_len: usize,
    vc_e_len: usize,
    changes_len: usize,
}

impl Graph {
    /// Records the current state for later restoration. Always pushes a fresh empty
    /// [`Modification::EdgeDeletion`] record, so that edge-coverings before and after
    /// the snapshot never coalesce into the same log entry -- this keeps
    /// `restore_snapshot` from needing to split a record mid-way through.
    pub fn create_snapshot(&mut self) -> Snapshot {
        self.changes.push(Modification::EdgeDeletion(Vec::new()));
        Snapshot {
            vc_v_len: self.vc_v.len(),
            vc_e_len: self.vc_e.len(),
            changes_len: self.changes.len(),
        }
    }

    /// Undoes every change recorded since `snap` was taken, restoring the graph to
    /// exactly the state it was in at that point.
    pub fn restore_snapshot(&mut self, snap: Snapshot) {
        while self.changes.len() > snap.changes_len {
            let m = self.changes.pop().expect("changes_len checked above");
            m.undo(self);
        }
        self.vc_v.truncate(snap.vc_v_len);
        self.vc_e.truncate(snap.vc_e_len);
    }

    /// Reads out the vertex cover accumulated so far (`vc_v`, plus everything the
    /// reduction-rule log translates back into), without mutating the graph.
    ///
    /// Intended to be called at a leaf of the branch-and-bound recursion, while every
    /// ancestor frame's snapshot is still live -- `restore_snapshot` only runs during
    /// unwinding, after the best-known solution has already been copied out by this
    /// method.
    pub fn read_vc(&self) -> Vec<VertexId> {
        let mut in_cover = vec![false; self.vertices.len()];
        for &v in &self.vc_v {
            in_cover[v.0 as usize] = true;
        }
        for m in self.changes.iter().rev() {
            m.translate_vc(&mut in_cover);
        }
        in_cover
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then(|| VertexId(i as u32)))
            .collect()
    }
}
