// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use petgraph::algo::kosaraju_scc;
use petgraph::graph::IndexType;
use petgraph::prelude::*;
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers, VisitMap, Visitable};
use std::collections::HashMap;

/// Strongly connected components of a graph, computed once and queried repeatedly.
#[derive(Clone, Debug)]
pub(crate) struct Sccs<Ix: IndexType> {
    sccs: Vec<Vec<NodeIndex<Ix>>>,
    multi_map: HashMap<NodeIndex<Ix>, usize>,
}

impl<Ix: IndexType> Sccs<Ix> {
    /// Creates a new instance from the provided graph.
    pub fn new<G>(graph: G) -> Self
    where
        G: IntoNeighborsDirected<NodeId = NodeIndex<Ix>> + Visitable + IntoNodeIdentifiers,
        <G as Visitable>::Map: VisitMap<NodeIndex<Ix>>,
    {
        // kosaraju_scc is iterative (tarjan_scc is recursive), and the flow graphs this
        // is run over can have unbounded depth.
        let sccs = kosaraju_scc(graph);
        let mut multi_map = HashMap::new();
        for (idx, scc) in sccs.iter().enumerate() {
            if scc.len() > 1 {
                multi_map.extend(scc.iter().map(|ix| (*ix, idx)));
            }
        }
        Self { sccs, multi_map }
    }

    /// Returns true if `a` and `b` are in the same scc.
    pub fn is_same_scc(&self, a: NodeIndex<Ix>, b: NodeIndex<Ix>) -> bool {
        if a == b {
            return true;
        }
        match (self.multi_map.get(&a), self.multi_map.get(&b)) {
            (Some(a_scc), Some(b_scc)) => a_scc == b_scc,
            _ => false,
        }
    }

    /// Returns all the SCCs in this graph.
    pub fn sccs(&self) -> &[Vec<NodeIndex<Ix>>] {
        &self.sccs
    }

    /// Returns all the SCCs with more than one element.
    pub fn multi_sccs(&self) -> impl Iterator<Item = &[NodeIndex<Ix>]> {
        self.sccs.iter().filter_map(|scc| {
            if scc.len() > 1 {
                Some(scc.as_slice())
            } else {
                None
            }
        })
    }
}
