// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod bounds_tests;
mod branch_tests;
mod config_tests;
mod graph_tests;
mod mirror_tests;
mod proptest_helpers;
mod reductions_tests;
