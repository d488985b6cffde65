// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writes the solver's result in the `s vc <n> <|VC|>` format from `spec.md` §6.

use std::io::{self, Write};
use vcover::{Graph, VertexId};

/// Writes recursion-step and cover-size statistics as `c `-prefixed comment lines,
/// then the `s vc <n> <|VC|>` header, then one vertex name per line for every member
/// of `cover`.
pub fn write_result<W: Write>(mut out: W, graph: &Graph, cover: &[VertexId]) -> io::Result<()> {
    writeln!(out, "c recursive steps: {}", graph.recursive_steps())?;
    writeln!(out, "c cover size: {}", cover.len())?;
    writeln!(out, "s vc {} {}", graph.vertices_len(), cover.len())?;
    for &v in cover {
        writeln!(out, "{}", graph.name(v))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_name_per_line() {
        let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
        let cover = vec![
            graph.vertex_by_name("a").unwrap(),
            graph.vertex_by_name("b").unwrap(),
        ];
        let mut buf = Vec::new();
        write_result(&mut buf, &graph, &cover).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("c "));
        assert!(lines.next().unwrap().starts_with("c "));
        assert_eq!(lines.next().unwrap(), "s vc 3 2");
        assert_eq!(lines.next().unwrap(), "a");
        assert_eq!(lines.next().unwrap(), "b");
        assert_eq!(lines.next(), None);
    }
}
