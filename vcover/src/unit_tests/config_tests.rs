// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::{Config, Rule};
use std::io::Write;

fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("vcover-test-{}-{}.cfg", name, std::process::id()));
    let mut f = std::fs::File::create(&path).expect("create temp config file");
    f.write_all(contents.as_bytes()).expect("write temp config file");
    path
}

#[test]
fn default_config_matches_upstream_defaults() {
    let cfg = Config::default();
    assert!(cfg.mirror);
    assert!(cfg.components);
    assert!(cfg.lp_bound);
    assert!(cfg.clique_bound);
    assert_eq!(cfg.enabled_rules[0], Rule::Deg12);
    assert_eq!(cfg.enabled_rules[1], Rule::UnconfinedCombo);
    assert_eq!(cfg.enabled_rules[2], Rule::CliqueNeighborhood);
    assert_eq!(cfg.enabled_rules[3], Rule::None);
    assert_eq!(cfg.lp_bound_cutoff, 10_000_000.0);
}

#[test]
fn parses_boolean_and_rule_keys() {
    let path = write_temp_config(
        "bools",
        "# a comment\n\
         CONFIG_MIRROR false\n\
         CONFIG_COMPONENTS false\n\
         CONFIG_RULE 4 OPT_DOM\n\
         LP_BOUND_CUTOFF 42.5\n",
    );
    let cfg = Config::from_file(&path).expect("valid config");
    std::fs::remove_file(&path).ok();

    assert!(!cfg.mirror);
    assert!(!cfg.components);
    assert_eq!(cfg.enabled_rules[3], Rule::Domination);
    assert_eq!(cfg.lp_bound_cutoff, 42.5);
    // Untouched keys keep their defaults.
    assert!(cfg.lp_bound);
}

#[test]
fn blank_lines_are_ignored() {
    let path = write_temp_config("blank", "\n\n# only comments\n\nCONFIG_MIRROR false\n\n");
    let cfg = Config::from_file(&path).expect("valid config");
    std::fs::remove_file(&path).ok();
    assert!(!cfg.mirror);
}

#[test]
fn unknown_key_is_an_error() {
    let path = write_temp_config("bad-key", "NOT_A_REAL_KEY 1\n");
    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}

#[test]
fn unknown_rule_name_is_an_error() {
    let path = write_temp_config("bad-rule", "CONFIG_RULE 1 OPT_NOT_A_RULE\n");
    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}

#[test]
fn rule_index_out_of_range_is_an_error() {
    let path = write_temp_config("bad-index", "CONFIG_RULE 99 OPT_DOM\n");
    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("vcover-test-does-not-exist.cfg");
    assert!(Config::from_file(&path).is_err());
}
