// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Solver configuration (`spec.md` §5): the branching and bounding toggles, the
//! reduction-rule schedule, and the per-rule tuning knobs, all gathered into one
//! struct threaded through the solver by reference rather than the source's globals.

pub use crate::bounds::clique::CliqueConfig;
pub use crate::reductions::clique_neighborhood::CnConfig;
pub use crate::reductions::deg3::Deg3Config;
pub use crate::reductions::unconfined::UnconfinedConfig;

use crate::errors::Error;
use std::fs;
use std::path::Path;

/// One slot of the 16-slot per-round optimization schedule (`spec.md` §5.2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    None,
    Deg1,
    Deg2,
    Deg3,
    Domination,
    Unconfined,
    CliqueNeighborhood,
    Lp,
    Deg12,
    UnconfinedCombo,
    Undeg3,
}

impl Rule {
    fn parse(s: &str) -> Option<Rule> {
        Some(match s {
            "OPT_NONE" => Rule::None,
            "OPT_DEG_1" => Rule::Deg1,
            "OPT_DEG_2" => Rule::Deg2,
            "OPT_DEG_3" => Rule::Deg3,
            "OPT_DOM" => Rule::Domination,
            "OPT_UNCONF" => Rule::Unconfined,
            "OPT_CN" => Rule::CliqueNeighborhood,
            "OPT_LP" => Rule::Lp,
            "OPT_DEG_12" => Rule::Deg12,
            "OPT_UNCONF_COMBO" => Rule::UnconfinedCombo,
            "OPT_UNDEG_3" => Rule::Undeg3,
            _ => return None,
        })
    }
}

pub(crate) const NUM_RULES: usize = 16;

/// All solver knobs, gathered in one place. `Default` matches the upstream binary's
/// compiled-in defaults exactly.
#[derive(Clone, Debug)]
pub struct Config {
    pub mirror: bool,
    pub components: bool,
    pub lp_bound: bool,
    pub clique_bound: bool,

    pub enabled_rules: [Rule; NUM_RULES],

    pub lp_bound_cutoff: f64,
    pub clique: CliqueConfig,
    pub deg3: Deg3Config,
    pub cn: CnConfig,
    pub unconfined: UnconfinedConfig,
}

impl Default for Config {
    fn default() -> Self {
        let mut enabled_rules = [Rule::None; NUM_RULES];
        enabled_rules[0] = Rule::Deg12;
        enabled_rules[1] = Rule::UnconfinedCombo;
        enabled_rules[2] = Rule::CliqueNeighborhood;

        Config {
            mirror: true,
            components: true,
            lp_bound: true,
            clique_bound: true,
            enabled_rules,
            lp_bound_cutoff: 10_000_000.0,
            clique: CliqueConfig::default(),
            deg3: Deg3Config::default(),
            cn: CnConfig::default(),
            unconfined: UnconfinedConfig::default(),
        }
    }
}

impl Config {
    /// Parses a whitespace-delimited `KEY value` config file, one setting per line,
    /// `#`-prefixed lines and blank lines ignored. Unknown keys or malformed values are
    /// reported as errors rather than silently skipped, so a typo in a config file
    /// doesn't pass through unnoticed.
    pub fn from_file(path: &Path) -> Result<Config, Error> {
        let text = fs::read_to_string(path)?;
        let mut cfg = Config::default();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            cfg.apply_line(line).map_err(|reason| Error::ConfigParseError {
                line: line.to_string(),
                reason,
            })?;
        }
        Ok(cfg)
    }

    fn apply_line(&mut self, line: &str) -> Result<(), String> {
        let parts: Vec<&str> = line.split(' ').filter(|s| !s.is_empty()).collect();
        if parts.is_empty() {
            return Ok(());
        }
        let key = parts[0];

        let bool_val = |i: usize| -> Result<bool, String> {
            parts.get(i).map(|s| *s == "true").ok_or_else(|| format!("{key}: missing value"))
        };
        let usize_val = |i: usize| -> Result<usize, String> {
            parts
                .get(i)
                .ok_or_else(|| format!("{key}: missing value"))?
                .parse()
                .map_err(|_| format!("{key}: not an integer"))
        };
        let f64_val = |i: usize| -> Result<f64, String> {
            parts
                .get(i)
                .ok_or_else(|| format!("{key}: missing value"))?
                .parse()
                .map_err(|_| format!("{key}: not a number"))
        };

        match key {
            "CONFIG_BRANCHING_V2" => { bool_val(1)?; }
            "CONFIG_COMPONENTS" => self.components = bool_val(1)?,
            "CONFIG_MIRROR" => self.mirror = bool_val(1)?,
            "CONFIG_LP_BOUND" => self.lp_bound = bool_val(1)?,
            "CONFIG_CLIQUE_BOUND" => self.clique_bound = bool_val(1)?,

            "CONFIG_RULE" => {
                if parts.len() != 3 {
                    return Err("CONFIG_RULE expects an index and a rule name".into());
                }
                let i: usize = parts[1].parse().map_err(|_| "CONFIG_RULE: bad index".to_string())?;
                if i < 1 || i > NUM_RULES {
                    return Err(format!("CONFIG_RULE index must be 1..={NUM_RULES}"));
                }
                let rule = Rule::parse(parts[2]).ok_or_else(|| format!("unknown rule {}", parts[2]))?;
                self.enabled_rules[i - 1] = rule;
            }

            "CN_CHECK1_ENABLED" => self.cn.check1_enabled = bool_val(1)?,
            "CN_CHECK1_MIN_DEG" => self.cn.check1_min_deg = usize_val(1)?,
            "CN_CHECK1_MAX_DEG" => self.cn.check1_max_deg = usize_val(1)?,
            "CN_CHECK2_ENABLED" => self.cn.check2_enabled = bool_val(1)?,
            "CN_CHECK2_CUTOFF" => self.cn.check2_cutoff = f64_val(1)?,
            "CN_CHECK2_RELAX_N" => self.cn.check2_relax_n = usize_val(1)?,
            "CN_CHECK2_LARGE_N" => self.cn.check2_large_n = usize_val(1)?,
            "CN_CHECK2_LARGE_K" => self.cn.check2_large_k = usize_val(1)?,

            "DEG3_CUTOFF1" => self.deg3.cutoff1 = usize_val(1)?,
            "DEG3_CUTOFF2" => self.deg3.cutoff2 = usize_val(1)?,

            "LP_BOUND_CUTOFF" => self.lp_bound_cutoff = f64_val(1)?,

            "CLIQUE_BOUND_ITER" => self.clique.iter = usize_val(1)? as u32,
            "CLIQUE_BOUND_ASCEND" => self.clique.ascend = bool_val(1)?,
            "CLIQUE_BOUND_MIXED" => self.clique.mixed = bool_val(1)?,
            "CLIQUE_BOUND_SHUFFLE_DIST" => self.clique.shuffle_dist = f64_val(1)?,
            "CLIQUE_BOUND_SHUFFLE_PCT" => self.clique.shuffle_pct = usize_val(1)? as u32,

            "UNCONF_CUTOFF" => self.unconfined.cutoff = usize_val(1)?,
            "UNCONF_MAX_DEG" => self.unconfined.max_deg = usize_val(1)?,

            other => return Err(format!("unknown option {other}")),
        }
        Ok(())
    }
}
