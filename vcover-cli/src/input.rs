// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reads the line-oriented edge-list format on stdin into a [`vcover::Graph`].

use color_eyre::eyre::{eyre, Result};
use std::io::BufRead;
use vcover::Graph;

/// Parses the format described in `spec.md` §6: a line whose first character is `c`
/// is a comment, a `p td <n>` line declares the expected vertex count as metadata
/// only (not enforced against the edges that follow), and every other non-blank line
/// is `<name1> <name2>`. Self-loops and duplicate edges are handled by
/// [`Graph::add_named_edge`].
///
/// The comment check is on the line's first *character*, matching the original
/// reader, not on whether the first token is exactly `"c"`. A vertex legitimately
/// named `c` at the start of a line (as in a literal reading of `spec.md` §8's star
/// scenario) is therefore swallowed as a comment rather than parsed as an edge --
/// that's the original's own documented behavior, reproduced here rather than
/// silently diverged from.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.starts_with('c') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let first = match tokens.next() {
            Some(t) => t,
            None => continue,
        };
        if first == "p" {
            continue;
        }
        let second = tokens
            .next()
            .ok_or_else(|| eyre!("malformed edge line '{}': expected two vertex names", line))?;
        if tokens.next().is_some() {
            return Err(eyre!("malformed edge line '{}': too many tokens", line));
        }
        graph.add_named_edge(first.to_string(), second.to_string());
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_problem_line_are_ignored() {
        let input = b"c a comment\np td 3\na b\nb d\nd a\n" as &[u8];
        let graph = read_graph(input).unwrap();
        assert_eq!(graph.vertices_len(), 3);
        assert_eq!(graph.uncovered_edge_count(), 3);
    }

    #[test]
    fn an_edge_line_starting_with_c_is_swallowed_as_a_comment() {
        // Matches the original reader's line[0] == 'c' check: a vertex named `c`
        // at the start of a line makes that line indistinguishable from a comment.
        let input = b"c a\nc b\n" as &[u8];
        let graph = read_graph(input).unwrap();
        assert_eq!(graph.vertices_len(), 0);
        assert_eq!(graph.uncovered_edge_count(), 0);
    }

    #[test]
    fn blank_lines_and_trailing_cr_are_tolerated() {
        let input = b"a b\r\n\n\nb c\r\n" as &[u8];
        let graph = read_graph(input).unwrap();
        assert_eq!(graph.vertices_len(), 3);
        assert_eq!(graph.uncovered_edge_count(), 2);
    }

    #[test]
    fn self_loop_spawns_a_clone_vertex() {
        let input = b"x x\n" as &[u8];
        let graph = read_graph(input).unwrap();
        assert_eq!(graph.vertices_len(), 2);
        assert_eq!(graph.uncovered_edge_count(), 1);
    }

    #[test]
    fn duplicate_edges_are_dropped() {
        let input = b"a b\nb a\na b\n" as &[u8];
        let graph = read_graph(input).unwrap();
        assert_eq!(graph.uncovered_edge_count(), 1);
    }

    #[test]
    fn a_lone_vertex_name_is_an_error() {
        let input = b"a\n" as &[u8];
        assert!(read_graph(input).is_err());
    }

    #[test]
    fn too_many_tokens_is_an_error() {
        let input = b"a b c\n" as &[u8];
        assert!(read_graph(input).is_err());
    }
}
