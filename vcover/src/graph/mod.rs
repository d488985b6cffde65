// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The mutable graph the solver operates on: adjacency, degree buckets, the current
//! partial vertex cover, and the reversible modification log.
//!
//! This is the core data structure described by the solver: a graph that shrinks as
//! edges get "covered" and vertices get merged or retired, with every structural change
//! reversible through [`Snapshot`]/[`Graph::restore_snapshot`].

mod core;
mod indexed_list;
mod snapshot;

pub use indexed_list::IndexedList;
pub use snapshot::{Modification, Snapshot};

use crate::errors::Error;
use indexmap::IndexMap;
use std::fmt;

/// Stable identity for a vertex. Never reused, even once the vertex is retired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(pub(crate) u32);

/// Stable identity for an edge. Never reused.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(pub(crate) u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Distinguishes an ordinary vertex from one synthesized by a reduction rule.
///
/// Replaces the source's `MergedVertex` subclass: merge/gadget bookkeeping lives here
/// as data rather than through a second `Vertex` type.
#[derive(Clone, Debug)]
pub enum VertexKind {
    /// A vertex present in (or derived directly from) the input graph.
    Regular,
    /// The result of folding a degree-2 vertex `v` into its neighbors `u` and `w`
    /// (the degree-2 fold reduction, `spec.md` §4.6).
    Merged {
        u: VertexId,
        v: VertexId,
        w: VertexId,
        /// Degrees of `u` and `w` immediately before the fold, needed to restore them.
        u_deg: usize,
        w_deg: usize,
    },
    /// The gadget vertex introduced by the "undeg-3" reduction, adjacent to `a`, `b`
    /// and `c`.
    Undeg3Gadget { a: VertexId, b: VertexId, c: VertexId },
}

#[derive(Clone, Debug)]
pub(crate) struct VertexData {
    pub(crate) id: VertexId,
    pub(crate) name: String,
    pub(crate) deg: usize,
    /// Uncovered incident edges: `(other endpoint, edge id)`.
    pub(crate) edges: Vec<(VertexId, EdgeId)>,
    /// Covered incident edges, same shape as `edges`.
    pub(crate) covered: Vec<(VertexId, EdgeId)>,
    pub(crate) kind: VertexKind,
}

#[derive(Clone, Debug)]
pub(crate) struct EdgeData {
    pub(crate) id: EdgeId,
    pub(crate) end: [VertexId; 2],
    pub(crate) covered: bool,
    /// `end[i]`'s position of this edge within its `edges` (if uncovered) or
    /// `covered` (if covered) vector.
    pub(crate) pos: [usize; 2],
}

/// Transient per-vertex working memory used by the reduction rules and bounds.
///
/// Every routine that sets one of these flags must clear it before returning, on
/// every exit path -- this is a borrowed resource, not persistent state. Kept as dense
/// vectors indexed by [`VertexId`] rather than fields on [`VertexData`] so that no
/// algorithm can observe another algorithm's leftover marks by accident.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    pub(crate) marked: Vec<bool>,
    pub(crate) in_c1: Vec<bool>,
    pub(crate) in_c2: Vec<bool>,
    pub(crate) s_marked: Vec<bool>,
    pub(crate) ns_marked: Vec<bool>,
    pub(crate) component: Vec<u32>,
}

impl Scratch {
    fn grow(&mut self, n: usize) {
        self.marked.resize(n, false);
        self.in_c1.resize(n, false);
        self.in_c2.resize(n, false);
        self.s_marked.resize(n, false);
        self.ns_marked.resize(n, false);
        self.component.resize(n, 0);
    }
}

/// The mutable graph the solver branches over.
///
/// See the module docs for the overview; [`Graph::from_edges`] is the usual entry
/// point, building a fresh graph from `(name, name)` pairs the way the CLI's edge-list
/// reader does.
#[derive(Debug)]
pub struct Graph {
    pub(crate) vertices: Vec<VertexData>,
    pub(crate) edges: Vec<EdgeData>,

    /// Live vertices (`deg > 0`), i.e. `spec.md`'s `V`.
    pub(crate) v_list: IndexedList<VertexId>,
    /// Degree-1/2/3 buckets, indexed `[1]`, `[2]`, `[3]` (`[0]` is unused).
    pub(crate) deg_buckets: [IndexedList<VertexId>; 4],
    /// Uncovered edges, i.e. `spec.md`'s `E`.
    pub(crate) e_list: IndexedList<EdgeId>,

    pub(crate) name_index: IndexMap<String, VertexId>,

    /// The vertex cover accumulated so far, `spec.md`'s `VC.V`.
    pub(crate) vc_v: Vec<VertexId>,
    /// Edges covered by `vc_v`, `spec.md`'s `VC.E`.
    pub(crate) vc_e: Vec<EdgeId>,

    pub(crate) changes: Vec<Modification>,

    pub(crate) scratch: Scratch,

    /// Hopcroft-Karp matching size, maintained incrementally by the matcher.
    pub(crate) matching_size: usize,
    pub(crate) recursive_steps: u64,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            v_list: IndexedList::new(),
            deg_buckets: [
                IndexedList::new(),
                IndexedList::new(),
                IndexedList::new(),
                IndexedList::new(),
            ],
            e_list: IndexedList::new(),
            name_index: IndexMap::new(),
            vc_v: Vec::new(),
            vc_e: Vec::new(),
            changes: Vec::new(),
            scratch: Scratch::default(),
            matching_size: 0,
            recursive_steps: 0,
        }
    }

    /// Builds a graph from an iterator of `(name1, name2)` edge pairs, exactly as
    /// `spec.md` §6 describes the edge-list input: vertex names are opaque tokens
    /// created on first mention, a self-loop (`name1 == name2`) spawns a dummy clone
    /// vertex adjacent to the original, and duplicate edges are dropped.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut g = Graph::new();
        for (a, b) in edges {
            g.add_named_edge(a.into(), b.into());
        }
        g
    }

    /// Returns (creating if necessary) the vertex with the given name.
    fn vertex_id_for_name(&mut self, name: String) -> VertexId {
        if let Some(&id) = self.name_index.get(&name) {
            return id;
        }
        let id = self.new_vertex(name.clone());
        self.name_index.insert(name, id);
        id
    }

    pub(crate) fn new_vertex(&mut self, name: String) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(VertexData {
            id,
            name,
            deg: 0,
            edges: Vec::new(),
            covered: Vec::new(),
            kind: VertexKind::Regular,
        });
        self.scratch.grow(self.vertices.len());
        id
    }

    /// Adds a single named edge using the semantics of `spec.md` §6 (self-loop spawns
    /// a clone, duplicates are dropped).
    pub fn add_named_edge(&mut self, a: String, b: String) {
        let a_id = self.vertex_id_for_name(a.clone());
        if a == b {
            // Self-loop: a dummy clone vertex adjacent to the original forces `a`
            // into every cover, the same way the original solver's input reader
            // handles it.
            let clone_name = format!("{}", self.vertex(a_id).name);
            let clone_id = self.new_vertex(clone_name);
            self.insert_raw_edge(a_id, clone_id);
            return;
        }
        let b_id = self.vertex_id_for_name(b);
        if self.has_uncovered_edge(a_id, b_id) {
            return;
        }
        self.insert_raw_edge(a_id, b_id);
    }

    fn has_uncovered_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a).edges.iter().any(|&(n, _)| n == b)
    }

    fn insert_raw_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        let a_pos = self.vertex(a).edges.len();
        let b_pos = self.vertex(b).edges.len();
        self.edges.push(EdgeData {
            id,
            end: [a, b],
            covered: false,
            pos: [a_pos, b_pos],
        });
        self.vertex_mut(a).edges.push((b, id));
        self.vertex_mut(b).edges.push((a, id));
        self.e_list.push(id);

        let a_deg = self.vertex(a).deg + 1;
        let b_deg = self.vertex(b).deg + 1;
        self.vert_change_deg(a, a_deg);
        self.vert_change_deg(b, b_deg);
        id
    }

    pub(crate) fn vertex(&self, id: VertexId) -> &VertexData {
        &self.vertices[id.0 as usize]
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut VertexData {
        &mut self.vertices[id.0 as usize]
    }

    pub(crate) fn edge(&self, id: EdgeId) -> &EdgeData {
        &self.edges[id.0 as usize]
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut EdgeData {
        &mut self.edges[id.0 as usize]
    }

    /// Display name of a vertex, stable across reductions.
    pub fn name(&self, id: VertexId) -> &str {
        &self.vertex(id).name
    }

    /// Number of live vertices (`deg > 0`).
    pub fn live_vertex_count(&self) -> usize {
        self.v_list.len()
    }

    /// Total number of vertices ever created, live or retired -- the size needed for
    /// a dense array indexed by raw vertex id.
    pub fn vertices_len(&self) -> usize {
        self.vertices.len()
    }

    /// Number of uncovered edges.
    pub fn uncovered_edge_count(&self) -> usize {
        self.e_list.len()
    }

    /// Live vertices, in no particular order.
    pub fn live_vertices(&self) -> &[VertexId] {
        self.v_list.as_slice()
    }

    /// Uncovered edges, in no particular order.
    pub fn live_edges(&self) -> &[EdgeId] {
        self.e_list.as_slice()
    }

    /// The two endpoints of an edge.
    pub fn endpoints(&self, id: EdgeId) -> (VertexId, VertexId) {
        let e = self.edge(id);
        (e.end[0], e.end[1])
    }

    /// Current degree (number of uncovered incident edges) of a vertex.
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertex(id).deg
    }

    /// Uncovered neighbors of a vertex.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id).edges.iter().map(|&(n, _)| n)
    }

    /// Recursive branch-and-bound calls made by the most recent (or in-progress)
    /// [`crate::solve`] -- a statistic for the output collaborator, not load-bearing
    /// for correctness.
    pub fn recursive_steps(&self) -> u64 {
        self.recursive_steps
    }

    /// The uncovered edge between `a` and `b`, if one exists.
    pub(crate) fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.vertex(a).edges.iter().find(|&&(n, _)| n == b).map(|&(_, e)| e)
    }

    /// Checks that the core invariants of `spec.md` §3 hold. Intended for debug
    /// assertions and tests, not the hot path.
    pub(crate) fn check_invariants(&self) {
        for v in self.v_list.as_slice() {
            let vd = self.vertex(*v);
            debug_assert_eq!(vd.edges.len(), vd.deg, "deg/edges length mismatch");
            for (i, &(other, eid)) in vd.edges.iter().enumerate() {
                let e = self.edge(eid);
                let side = if e.end[0] == *v { 0 } else { 1 };
                debug_assert_eq!(e.pos[side], i);
                debug_assert_eq!(e.end[1 - side], other);
                debug_assert!(!e.covered);
            }
        }
        for k in 1..=3usize {
            for v in self.deg_buckets[k].as_slice() {
                debug_assert_eq!(self.vertex(*v).deg, k);
            }
        }
    }

    /// Resolves a vertex name to its id, for result reporting.
    pub fn vertex_by_name(&self, name: &str) -> Result<VertexId, Error> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVertexName(name.to_string()))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}
