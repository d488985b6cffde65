// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A minimum vertex cover solver.
//!
//! `vcover` computes an exact minimum vertex cover of a graph via branch-and-bound:
//! the live graph is shrunk by a battery of kernelization rules (degree folds,
//! domination, unconfined vertices, clique-neighborhood and "undeg-3" gadgets), a
//! half-integral LP relaxation and a greedy clique-cover give lower bounds to prune
//! the search, and the branch driver splits into independent connected components
//! and uses mirror branching to avoid widening branches unnecessarily.
//!
//! # Example
//!
//! ```
//! use vcover::{Config, Graph};
//!
//! let mut graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
//! let cover = vcover::solve(&mut graph, &Config::default());
//! assert_eq!(cover.len(), 2);
//! ```

mod branch;
pub mod config;
pub mod errors;
pub mod graph;
mod mirror;
pub(crate) mod petgraph_support;
pub(crate) mod reductions;
#[cfg(test)]
mod unit_tests;

mod bounds;

pub use config::Config;
pub use errors::Error;
pub use graph::{EdgeId, Graph, VertexId};

/// Computes a minimum vertex cover of `graph`, under the rules and tuning knobs in
/// `cfg`. `graph` is left unchanged: every reduction and branch taken during the
/// search is undone before this returns.
pub fn solve(graph: &mut Graph, cfg: &Config) -> Vec<VertexId> {
    branch::solve(graph, cfg)
}
