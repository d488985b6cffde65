// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lower-bound engines consulted by the branch driver to prune.

pub(crate) mod clique;
pub(crate) mod lp;
