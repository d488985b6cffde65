// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The kernelization reduction rules of `spec.md` §4.6, one module per rule family.
//! Each rule mutates [`crate::graph::Graph`] in place and records its change on the
//! modification log, so that every application is reversible through
//! [`crate::graph::Graph::restore_snapshot`].

pub(crate) mod clique_neighborhood;
pub(crate) mod deg3;
pub(crate) mod degree;
pub(crate) mod domination;
pub(crate) mod unconfined;
pub(crate) mod undeg3;
