// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A command-line frontend for `vcover`.
//!
//! Reads an edge list on stdin, computes a proven-minimum vertex cover, and writes
//! it to stdout. See `spec.md` §6 for the exact input/output formats.

mod input;
mod output;

use clap::Parser;
use color_eyre::Result;
use std::io;
use std::path::PathBuf;
use vcover::Config;

#[derive(Debug, Parser)]
#[clap(about = "Exact minimum vertex cover solver")]
struct Args {
    /// Configuration file tuning bounds, the rule schedule, and cutoffs
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let stdin = io::stdin();
    let mut graph = input::read_graph(stdin.lock())?;
    let cover = vcover::solve(&mut graph, &cfg);

    let stdout = io::stdout();
    output::write_result(stdout.lock(), &graph, &cover)?;
    Ok(())
}
