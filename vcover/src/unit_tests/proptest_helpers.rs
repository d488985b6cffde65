// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Brute-force certification of the solver's output against small random graphs
//! (`spec.md` §8's property-based testable scenario).

use crate::config::Config;
use crate::graph::Graph;
use proptest::prelude::*;

/// Minimum vertex cover size by exhaustive subset enumeration, for graphs small
/// enough that `2^n` is cheap.
fn brute_force_mvc(n: usize, edges: &[(usize, usize)]) -> usize {
    for size in 0..=n {
        let mut mask = (1u32 << size) - 1;
        let limit = 1u32 << n;
        while mask < limit {
            if mask.count_ones() as usize == size
                && edges.iter().all(|&(a, b)| {
                    (mask >> a) & 1 == 1 || (mask >> b) & 1 == 1
                })
            {
                return size;
            }
            // Gosper's hack: next mask with the same popcount.
            let c = mask & mask.wrapping_neg();
            let r = mask + c;
            mask = if c == 0 { limit } else { (((r ^ mask) >> 2) / c) | r };
        }
    }
    n
}

fn random_graph_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    let mut pairs = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            pairs.push((a, b));
        }
    }
    proptest::collection::vec(any::<bool>(), pairs.len())
        .prop_map(move |picks| {
            pairs
                .iter()
                .zip(picks)
                .filter_map(|(&edge, picked)| if picked { Some(edge) } else { None })
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solver_matches_brute_force_on_small_random_graphs(edges in random_graph_strategy(7)) {
        if edges.is_empty() {
            return Ok(());
        }
        let mut g = Graph::from_edges(
            edges.iter().map(|&(a, b)| (a.to_string(), b.to_string())),
        );
        let cover = crate::solve(&mut g, &Config::default());

        let expected = brute_force_mvc(7, &edges);
        prop_assert_eq!(cover.len(), expected);
    }
}
