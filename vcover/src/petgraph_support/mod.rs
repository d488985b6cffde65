// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Graph algorithms built on top of [`petgraph`], used by the lower-bound engines.

pub(crate) mod bipartite;
pub(crate) mod scc;
