// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The public graph operations of `spec.md` §4.1: `delete_vertex`, `add_to_vc`,
//! `vert_change_deg`, plus the lower-level edge-list surgery (swap-remove with
//! back-pointer maintenance) those operations are built from.

use super::snapshot::Modification;
use super::{EdgeId, Graph, VertexId, VertexKind};

impl Graph {
    /// Moves `v` between the live list and the degree buckets so invariant 5 of
    /// `spec.md` §3 holds, for a new degree of `new_deg`.
    pub(crate) fn vert_change_deg(&mut self, v: VertexId, new_deg: usize) {
        let old_deg = self.vertex(v).deg;
        if old_deg == new_deg {
            return;
        }

        if old_deg == 0 {
            self.v_list.push(v);
        } else if (1..=3).contains(&old_deg) {
            self.deg_buckets[old_deg].remove(&v);
        }

        if new_deg == 0 {
            self.v_list.remove(&v);
        } else if (1..=3).contains(&new_deg) {
            self.deg_buckets[new_deg].push(v);
        }

        self.vertex_mut(v).deg = new_deg;
    }

    /// Coalescing edge-cover record: consecutive `delete_vertex`/cover-edge pushes
    /// collapse into one log entry, except immediately after a snapshot, which force
    /// -appends a fresh empty record specifically to prevent coalescing across the
    /// snapshot boundary (this is intentional, not an oversight -- see
    /// `create_snapshot`).
    fn register_edge_deletion(&mut self, e: EdgeId) {
        match self.changes.last_mut() {
            Some(Modification::EdgeDeletion(edges)) => edges.push(e),
            _ => self.changes.push(Modification::EdgeDeletion(vec![e])),
        }
    }

    /// Moves an edge from one endpoint-local list to another (`edges` <-> `covered`),
    /// maintaining the swap-removed edge's back-pointer and the destination's new
    /// back-pointer.
    fn move_edge_slot(
        from: &mut Vec<(VertexId, EdgeId)>,
        to: &mut Vec<(VertexId, EdgeId)>,
        pos: usize,
    ) -> (VertexId, EdgeId) {
        let moved = from.swap_remove(pos);
        to.push(moved);
        (moved.0, moved.1)
    }

    /// Removes `v` from the live graph by covering each of its incident edges.
    /// Postcondition: `v.deg == 0` and `v` is not in `V`.
    pub fn delete_vertex(&mut self, v: VertexId) {
        debug_assert!(!matches!(self.vertex(v).kind, VertexKind::Merged { .. }));

        while let Some(&(u, eid)) = self.vertex(v).edges.last() {
            let side_v = self.edge_side(eid, v);
            let side_u = 1 - side_v;

            // Move the edge to v's covered list, fixing up the back-pointer of
            // whichever edge got swapped into its old slot.
            let pos = self.edge(eid).pos[side_v];
            debug_assert_eq!(self.vertex(v).edges[pos].1, eid);
            let vdata = &mut self.vertex_mut(v);
            let (_, moved_eid) = Self::move_edge_slot(&mut vdata.edges, &mut vdata.covered, pos);
            debug_assert_eq!(moved_eid, eid);
            if pos < self.vertex(v).edges.len() {
                let swapped = self.vertex(v).edges[pos].1;
                self.set_edge_pos(swapped, v, pos);
            }
            let new_pos_v = self.vertex(v).covered.len() - 1;
            self.edge_mut(eid).pos[side_v] = new_pos_v;

            let pos_u = self.edge(eid).pos[side_u];
            debug_assert_eq!(self.vertex(u).edges[pos_u].1, eid);
            let udata = &mut self.vertex_mut(u);
            let (_, moved_eid_u) =
                Self::move_edge_slot(&mut udata.edges, &mut udata.covered, pos_u);
            debug_assert_eq!(moved_eid_u, eid);
            if pos_u < self.vertex(u).edges.len() {
                let swapped = self.vertex(u).edges[pos_u].1;
                self.set_edge_pos(swapped, u, pos_u);
            }
            let new_pos_u = self.vertex(u).covered.len() - 1;
            self.edge_mut(eid).pos[side_u] = new_pos_u;

            self.edge_mut(eid).covered = true;
            self.e_list.remove(&eid);
            self.vc_e.push(eid);
            self.register_edge_deletion(eid);

            let u_deg = self.vertex(u).deg - 1;
            self.vert_change_deg(u, u_deg);
        }

        self.vert_change_deg(v, 0);
    }

    /// Which side (0 or 1) of `eid` is `v`.
    fn edge_side(&self, eid: EdgeId, v: VertexId) -> usize {
        if self.edge(eid).end[0] == v {
            0
        } else {
            debug_assert_eq!(self.edge(eid).end[1], v);
            1
        }
    }

    /// Fixes up `eid`'s stored position for endpoint `v` to `pos`, after a swap moved
    /// `eid` into slot `pos` of `v`'s edge list.
    fn set_edge_pos(&mut self, eid: EdgeId, v: VertexId, pos: usize) {
        let side = self.edge_side(eid, v);
        self.edge_mut(eid).pos[side] = pos;
    }

    /// `delete_vertex(v)` then records `v` as part of the cover.
    pub fn add_to_vc(&mut self, v: VertexId) {
        self.delete_vertex(v);
        self.vc_v.push(v);
    }

    /// Creates a brand new edge `{a, b}` (used by the deg-3, clique-neighborhood and
    /// undeg-3 gadgets to stitch in replacement structure), returning its id.
    ///
    /// Unlike `insert_raw_edge` used at input-parsing time, this does not touch
    /// `vert_change_deg`'s bucket bookkeeping by itself -- callers are expected to
    /// follow up with their own degree update once all of a batch's edges are added,
    /// matching the source's `deg3_create_edge`/`cn_create_edge` ordering.
    pub(crate) fn create_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        let a_pos = self.vertex(a).edges.len();
        let b_pos = self.vertex(b).edges.len();
        self.edges.push(super::EdgeData {
            id,
            end: [a, b],
            covered: false,
            pos: [a_pos, b_pos],
        });
        self.vertex_mut(a).edges.push((b, id));
        self.vertex_mut(b).edges.push((a, id));
        self.e_list.push(id);
        id
    }

    /// Removes a live (uncovered) edge entirely -- used only to undo a gadget's
    /// inserted edges. Unlike `delete_vertex`, this destroys the edge rather than
    /// covering it.
    pub(crate) fn destroy_edge(&mut self, eid: EdgeId) {
        let (a, b) = self.endpoints(eid);
        let pos_a = self.edge(eid).pos[0];
        let pos_b = self.edge(eid).pos[1];

        let a_removed = self.vertex_mut(a).edges.swap_remove(pos_a);
        debug_assert_eq!(a_removed.1, eid);
        if pos_a < self.vertex(a).edges.len() {
            let swapped = self.vertex(a).edges[pos_a].1;
            self.set_edge_pos(swapped, a, pos_a);
        }

        let b_removed = self.vertex_mut(b).edges.swap_remove(pos_b);
        debug_assert_eq!(b_removed.1, eid);
        if pos_b < self.vertex(b).edges.len() {
            let swapped = self.vertex(b).edges[pos_b].1;
            self.set_edge_pos(swapped, b, pos_b);
        }

        self.e_list.remove(&eid);

        let a_deg = self.vertex(a).deg - 1;
        self.vert_change_deg(a, a_deg);
        let b_deg = self.vertex(b).deg - 1;
        self.vert_change_deg(b, b_deg);
    }

    /// Inverse of [`destroy_edge`](Self::destroy_edge): reinstates edge `eid` between
    /// `a` and `b`, which must currently have no edge between them.
    pub(crate) fn restore_edge(&mut self, eid: EdgeId, a: VertexId, b: VertexId) {
        let a_pos = self.vertex(a).edges.len();
        let b_pos = self.vertex(b).edges.len();
        self.vertex_mut(a).edges.push((b, eid));
        self.vertex_mut(b).edges.push((a, eid));
        let e = self.edge_mut(eid);
        e.end = [a, b];
        e.pos = [a_pos, b_pos];
        e.covered = false;
        self.e_list.push(eid);

        let a_deg = self.vertex(a).deg + 1;
        self.vert_change_deg(a, a_deg);
        let b_deg = self.vertex(b).deg + 1;
        self.vert_change_deg(b, b_deg);
    }

    /// Moves an edge currently covered (in some vertex's `covered` list) back into the
    /// live graph, the structural inverse of the edge-covering half of
    /// [`delete_vertex`](Self::delete_vertex). Does not touch degree buckets; callers
    /// fix those up once all of a record's edges have been uncovered.
    pub(crate) fn uncover_edge(&mut self, eid: EdgeId) {
        let (a, b) = self.endpoints(eid);
        for (v, side) in [(a, 0usize), (b, 1usize)] {
            let pos = self.edge(eid).pos[side];
            let vdata = &mut self.vertex_mut(v);
            debug_assert_eq!(vdata.covered[pos].1, eid);
            let (_, moved_eid) = Self::move_edge_slot(&mut vdata.covered, &mut vdata.edges, pos);
            debug_assert_eq!(moved_eid, eid);
            if pos < self.vertex(v).covered.len() {
                let swapped = self.vertex(v).covered[pos].1;
                let side2 = self.edge_side(swapped, v);
                self.edge_mut(swapped).pos[side2] = pos;
            }
            let new_pos = self.vertex(v).edges.len() - 1;
            self.edge_mut(eid).pos[side] = new_pos;
        }
        self.edge_mut(eid).covered = false;
        self.e_list.push(eid);
    }

    /// Sets `v`'s degree bucket to match its current `edges.len()`.
    pub(crate) fn recompute_degree(&mut self, v: VertexId) {
        let d = self.vertex(v).edges.len();
        self.vert_change_deg(v, d);
    }

    /// Rewires one endpoint of `eid` from `old` to `new`; `old`'s own edge list is left
    /// untouched (callers that retire `old` wholesale clear its edge list themselves).
    /// Also serves as its own inverse: calling it again with `old` and `new` swapped
    /// rewires back.
    pub(crate) fn rewire_endpoint(&mut self, eid: EdgeId, old: VertexId, new: VertexId) {
        let side = self.edge_side(eid, old);
        let other_side = 1 - side;
        let other = self.edge(eid).end[other_side];
        let other_pos = self.edge(eid).pos[other_side];
        self.vertex_mut(other).edges[other_pos].0 = new;

        let new_pos = self.vertex(new).edges.len();
        self.vertex_mut(new).edges.push((other, eid));
        let e = self.edge_mut(eid);
        e.end[side] = new;
        e.pos[side] = new_pos;
    }

    /// Structurally removes `eid`, which is incident to `retiring` (whose edge list is
    /// about to be cleared wholesale and so is left untouched here) and `kept`, fixing
    /// up `kept`'s degree.
    fn absorb_edge(&mut self, eid: EdgeId, kept: VertexId) {
        let pos = self.edge_side(eid, kept);
        let pos = self.edge(eid).pos[pos];
        let kdata = &mut self.vertex_mut(kept);
        kdata.edges.swap_remove(pos);
        if pos < self.vertex(kept).edges.len() {
            let swapped = self.vertex(kept).edges[pos].1;
            self.set_edge_pos(swapped, kept, pos);
        }
        self.e_list.remove(&eid);
        let kept_deg = self.vertex(kept).deg - 1;
        self.vert_change_deg(kept, kept_deg);
    }

    /// Folds a degree-2 vertex `v` into a single merged vertex replacing its two
    /// neighbors, the "degree-2 fold" reduction of `spec.md` §4.6. `v` must currently
    /// have degree exactly 2. Returns the new merged vertex.
    ///
    /// If `v`'s two neighbors already share another neighbor, that duplicated edge is
    /// absorbed into the merged vertex rather than creating a parallel edge.
    pub fn fold_degree_two(&mut self, v: VertexId) -> VertexId {
        debug_assert_eq!(self.degree(v), 2);
        let nbrs: Vec<VertexId> = self.neighbors(v).collect();
        let (u, w) = (nbrs[0], nbrs[1]);
        let u_deg = self.degree(u);
        let w_deg = self.degree(w);

        let merged_name = format!("{}+{}", self.name(u), self.name(w));
        let m = self.new_vertex(merged_name);
        self.vertex_mut(m).kind = VertexKind::Merged {
            u,
            v,
            w,
            u_deg,
            w_deg,
        };

        // Covers the u-v and w-v edges and logs an EdgeDeletion record for them,
        // separately from the VertexMerge record pushed below.
        self.delete_vertex(v);

        let u_edges: Vec<EdgeId> = self.vertex(u).edges.iter().map(|&(_, e)| e).collect();
        let w_edges: Vec<EdgeId> = self.vertex(w).edges.iter().map(|&(_, e)| e).collect();

        let u_neighbor_map: std::collections::HashMap<VertexId, EdgeId> = u_edges
            .iter()
            .map(|&e| {
                let (a, b) = self.endpoints(e);
                let n = if a == u { b } else { a };
                (n, e)
            })
            .collect();

        let mut absorbed = Vec::new();
        let mut w_kept = Vec::new();
        for &e in &w_edges {
            let (a, b) = self.endpoints(e);
            let n = if a == w { b } else { a };
            if u_neighbor_map.contains_key(&n) {
                self.absorb_edge(e, n);
                absorbed.push((e, w, n));
            } else {
                w_kept.push(e);
            }
        }

        for &e in &u_edges {
            self.rewire_endpoint(e, u, m);
        }
        for &e in &w_kept {
            self.rewire_endpoint(e, w, m);
        }

        self.vertex_mut(u).edges.clear();
        self.vertex_mut(w).edges.clear();
        self.vert_change_deg(u, 0);
        self.vert_change_deg(w, 0);

        let m_deg = self.vertex(m).edges.len();
        self.vert_change_deg(m, m_deg);

        self.changes.push(Modification::VertexMerge {
            merged: m,
            u,
            v,
            w,
            u_edges,
            w_edges: w_kept,
            absorbed,
        });
        m
    }
}
